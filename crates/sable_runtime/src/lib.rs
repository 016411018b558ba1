//! sable_runtime: Runtime values, the environment chain, and the object model.
//!
//! The evaluator (external to this repository's core) drives these types: it
//! allocates an [`environment::Environment`] per block or call activation,
//! addresses variables through the hop counts the resolver computed, and
//! instantiates classes as call expressions execute.

pub mod environment;
pub mod error;
pub mod object;
pub mod value;

pub use environment::{EnvRef, Environment};
pub use error::RuntimeError;
pub use object::{Callable, Class, Instance};
pub use value::Value;
