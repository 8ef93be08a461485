//! Compiler error types

use thiserror::Error;

use crate::criteria::Operator;

/// Result type for query compilation
pub type CompilerResult<T> = Result<T, CompilerError>;

/// Query compilation errors
///
/// Compilation is all-or-nothing: any error aborts the whole call, no
/// partial document is returned. Silent query corruption is worse than a
/// visible error, so operators without a rendering rule fail fast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompilerError {
    #[error("No query rendering for operator '{}'", .0.as_str())]
    UnsupportedOperator(Operator),

    #[error("Invalid criterion on field '{field}': {reason}")]
    InvalidCriterion {
        /// Field of the offending criterion
        field: String,
        /// What is structurally wrong with it
        reason: String,
    },
}

impl CompilerError {
    /// Create an invalid criterion error
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CompilerError::InvalidCriterion {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
