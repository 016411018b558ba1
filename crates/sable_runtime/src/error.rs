//! Runtime error definitions.

use sable_core::text::TextSpan;
use thiserror::Error;

/// An error raised while evaluating a statement or expression.
///
/// Unlike resolver diagnostics these are fatal to the evaluation in progress
/// and carry the offending token's source span.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable { name: String, span: TextSpan },

    #[error("Undefined property '{name}'.")]
    UndefinedProperty { name: String, span: TextSpan },

    /// A resolved reference did not line up with the runtime environment
    /// chain. Always an interpreter bug, never a user error: the resolver
    /// guarantees the binding exists at the recorded depth.
    #[error("resolved variable '{name}' has no binding {depth} scopes up")]
    StaleResolution { name: String, depth: usize },
}

impl RuntimeError {
    /// The source span this error points at, when it has one.
    pub fn span(&self) -> Option<TextSpan> {
        match self {
            RuntimeError::UndefinedVariable { span, .. }
            | RuntimeError::UndefinedProperty { span, .. } => Some(*span),
            RuntimeError::StaleResolution { .. } => None,
        }
    }
}
