//! In-memory entity metadata registry
//!
//! Resolution is best-effort by design: an unknown entity, an unknown
//! property, or a field without a mapped name all resolve to `None`, and
//! the mapper passes the logical name through unchanged. A registry miss
//! is never an error.

use std::collections::HashMap;

use super::types::{EntitySchema, FieldFormat};

/// Read-only field resolution service consumed by the mapper
pub trait FieldResolver {
    /// Resolves a logical property to the physical document field name
    fn resolve_field_name(&self, entity: &str, property: &str) -> Option<&str>;

    /// Resolves a logical property's declared wire format
    fn resolve_field_format(&self, entity: &str, property: &str) -> Option<&FieldFormat>;
}

/// Registry of entity schemas indexed by entity name
#[derive(Debug, Clone, Default)]
pub struct MappingRegistry {
    schemas: HashMap<String, EntitySchema>,
}

impl MappingRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            schemas: HashMap::new(),
        }
    }

    /// Registers an entity schema, replacing any previous schema with the
    /// same name.
    pub fn register(&mut self, schema: EntitySchema) {
        self.schemas.insert(schema.name.clone(), schema);
    }

    /// Registers a schema parsed from its JSON document form
    pub fn register_json(&mut self, json: &str) -> serde_json::Result<()> {
        let schema: EntitySchema = serde_json::from_str(json)?;
        self.register(schema);
        Ok(())
    }

    /// Looks up a registered schema
    pub fn schema(&self, entity: &str) -> Option<&EntitySchema> {
        self.schemas.get(entity)
    }
}

impl FieldResolver for MappingRegistry {
    fn resolve_field_name(&self, entity: &str, property: &str) -> Option<&str> {
        self.schemas
            .get(entity)?
            .field(property)?
            .mapped_name
            .as_deref()
    }

    fn resolve_field_format(&self, entity: &str, property: &str) -> Option<&FieldFormat> {
        self.schemas.get(entity)?.field(property)?.format.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDef;

    fn person_registry() -> MappingRegistry {
        let mut registry = MappingRegistry::new();
        registry.register(
            EntitySchema::new("person")
                .with_field("firstName", FieldDef::text().mapped("first-name"))
                .with_field("id", FieldDef::keyword())
                .with_field(
                    "birthDate",
                    FieldDef::date_pattern("%d.%m.%Y").mapped("birth-date"),
                ),
        );
        registry
    }

    #[test]
    fn test_resolves_mapped_name() {
        let registry = person_registry();
        assert_eq!(
            registry.resolve_field_name("person", "firstName"),
            Some("first-name")
        );
    }

    #[test]
    fn test_miss_is_none_not_error() {
        let registry = person_registry();
        // unmapped field
        assert_eq!(registry.resolve_field_name("person", "id"), None);
        // unknown property
        assert_eq!(registry.resolve_field_name("person", "nickname"), None);
        // unknown entity
        assert_eq!(registry.resolve_field_name("order", "firstName"), None);
    }

    #[test]
    fn test_resolves_format() {
        let registry = person_registry();
        assert_eq!(
            registry.resolve_field_format("person", "birthDate"),
            Some(&FieldFormat::pattern("%d.%m.%Y"))
        );
        assert_eq!(registry.resolve_field_format("person", "firstName"), None);
    }

    #[test]
    fn test_register_json() {
        let mut registry = MappingRegistry::new();
        registry
            .register_json(
                r#"{
                    "name": "person",
                    "fields": {
                        "birthDate": {
                            "mapped_name": "birth-date",
                            "field_type": "date",
                            "format": {"format": "date_pattern", "pattern": "%d.%m.%Y"}
                        }
                    }
                }"#,
            )
            .unwrap();

        assert_eq!(
            registry.resolve_field_name("person", "birthDate"),
            Some("birth-date")
        );
    }
}
