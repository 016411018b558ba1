//! sable_ast: AST node and token definitions for the Sable interpreter.
//!
//! The parser (external to this repository's core) produces these nodes; the
//! resolver walks them and the runtime consumes the tokens they carry for
//! error reporting. Variable reference and assignment nodes carry a stable
//! [`types::NodeId`] so the resolver's hop-count table can key on them across
//! the resolve/evaluate boundary.

pub mod node;
pub mod token;
pub mod types;

pub use node::{Expr, FunctionDecl, LiteralValue, Stmt};
pub use token::{Token, TokenKind};
pub use types::NodeId;
