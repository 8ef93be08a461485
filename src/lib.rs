//! escriteria - A strict, deterministic criteria-to-query compiler for
//! Elasticsearch-style search engines
//!
//! Criteria trees are built against logical entity properties, rewritten
//! against entity metadata (physical field names, per-field wire formats),
//! then rendered into a nested boolean-query document:
//!
//! ```
//! use escriteria::compiler::QueryCompiler;
//! use escriteria::convert::DefaultValueConverter;
//! use escriteria::criteria::Criteria;
//! use escriteria::mapper::CriteriaMapper;
//! use escriteria::schema::{EntitySchema, FieldDef, MappingRegistry};
//!
//! let mut registry = MappingRegistry::new();
//! registry.register(
//!     EntitySchema::new("person")
//!         .with_field("firstName", FieldDef::text().mapped("first-name")),
//! );
//!
//! let converter = DefaultValueConverter::new();
//! let mapper = CriteriaMapper::new(&registry, &converter);
//!
//! let criteria = Criteria::new("firstName").matches("John");
//! let mapped = mapper.map_criteria(&criteria, "person").unwrap();
//! let document = QueryCompiler::create_query(&mapped).unwrap().unwrap();
//!
//! assert_eq!(
//!     document,
//!     serde_json::json!({ "match": { "first-name": { "query": "John" } } })
//! );
//! ```

pub mod compiler;
pub mod convert;
pub mod criteria;
pub mod mapper;
pub mod schema;
