//! sable_resolver: Static scope resolution for the Sable interpreter.
//!
//! Runs after parsing and before evaluation. Computes, for every local
//! variable reference, the number of enclosing scopes between the reference
//! and its declaration, and reports binding errors as diagnostics without
//! aborting the pass.

pub mod resolver;
pub mod scope;

pub use resolver::{resolve, ResolveOutput, ResolvedLocals, Resolver};
pub use scope::{BindingState, Scope, ScopeStack};
