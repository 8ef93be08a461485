//! Criteria mapping subsystem
//!
//! Bridges the logical criteria model and the engine's document schema:
//! property names are resolved to physical field names (best-effort, with
//! identity passthrough on a miss) and typed values are converted to wire
//! strings using per-field formats. Mapping is a pure transform producing
//! a new tree.

mod errors;
mod mapper;

pub use errors::{MappingError, MappingResult};
pub use mapper::CriteriaMapper;
