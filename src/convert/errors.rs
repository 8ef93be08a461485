//! Value conversion errors

use thiserror::Error;

/// Result type for value conversion
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Value conversion errors
///
/// Both variants indicate a configuration gap between entity metadata and
/// criteria content, not a transient failure; retrying never helps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Cannot convert {value_type} value using format '{format}'")]
    Unconvertible {
        /// Runtime type of the offending value
        value_type: &'static str,
        /// The declared format that does not apply to it
        format: String,
    },

    #[error("Invalid date pattern '{pattern}'")]
    InvalidPattern {
        /// The pattern that failed to parse
        pattern: String,
    },
}
