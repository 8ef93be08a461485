//! Mapper error types

use thiserror::Error;

use crate::convert::ConvertError;

/// Result type for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;

/// Mapping errors
///
/// A mapping failure means the entity metadata and the criteria content
/// disagree (e.g. a date pattern declared on a field that received a
/// boolean). It is surfaced to the caller and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("Field '{field}': {source}")]
    Conversion {
        /// Logical property name of the offending criterion
        field: String,
        #[source]
        source: ConvertError,
    },
}
