//! Entity metadata subsystem
//!
//! Maps logical entity properties to the search engine's document schema:
//! physical field names and per-field wire formats. The mapper consumes
//! this through the read-only [`FieldResolver`] trait; [`MappingRegistry`]
//! is the in-memory implementation.
//!
//! Name resolution is best-effort: a miss means "use the logical name
//! as-is", never an error.

mod registry;
mod types;

pub use registry::{FieldResolver, MappingRegistry};
pub use types::{EntitySchema, FieldDef, FieldFormat, FieldType};
