//! Entity metadata type definitions
//!
//! An entity schema records, per logical property:
//! - the physical document field name, when it differs
//! - the engine-level field type
//! - an optional wire format for temporal values

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Engine-level field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Analyzed text
    Text,
    /// Non-analyzed exact-value string
    Keyword,
    /// 64-bit signed integer
    Integer,
    /// 64-bit floating point
    Float,
    /// Boolean
    Boolean,
    /// Date or instant
    Date,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Keyword => "keyword",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
        }
    }
}

/// On-wire rendering format for a field's values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum FieldFormat {
    /// chrono strftime pattern, e.g. `%d.%m.%Y`
    DatePattern {
        /// The pattern string
        pattern: String,
    },
    /// Milliseconds since the Unix epoch, rendered as a decimal string
    EpochMillis,
}

impl FieldFormat {
    /// Creates a custom date pattern format
    pub fn pattern(pattern: impl Into<String>) -> Self {
        FieldFormat::DatePattern {
            pattern: pattern.into(),
        }
    }
}

/// Per-property metadata entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Physical document field name; `None` means the logical name is used
    /// on the wire as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_name: Option<String>,
    /// Engine-level field type
    pub field_type: FieldType,
    /// Wire format for values, if the field declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<FieldFormat>,
}

impl FieldDef {
    /// Create a text field with no name mapping
    pub fn text() -> Self {
        Self {
            mapped_name: None,
            field_type: FieldType::Text,
            format: None,
        }
    }

    /// Create a keyword field with no name mapping
    pub fn keyword() -> Self {
        Self {
            mapped_name: None,
            field_type: FieldType::Keyword,
            format: None,
        }
    }

    /// Create an integer field with no name mapping
    pub fn integer() -> Self {
        Self {
            mapped_name: None,
            field_type: FieldType::Integer,
            format: None,
        }
    }

    /// Create a date field with a custom pattern
    pub fn date_pattern(pattern: impl Into<String>) -> Self {
        Self {
            mapped_name: None,
            field_type: FieldType::Date,
            format: Some(FieldFormat::pattern(pattern)),
        }
    }

    /// Create a date field rendered as epoch milliseconds
    pub fn date_epoch_millis() -> Self {
        Self {
            mapped_name: None,
            field_type: FieldType::Date,
            format: Some(FieldFormat::EpochMillis),
        }
    }

    /// Sets the physical document field name
    pub fn mapped(mut self, name: impl Into<String>) -> Self {
        self.mapped_name = Some(name.into());
        self
    }
}

/// Metadata for a single entity type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySchema {
    /// Entity name the registry keys on
    pub name: String,
    /// Logical property name → field metadata
    pub fields: HashMap<String, FieldDef>,
}

impl EntitySchema {
    /// Creates an empty schema for the given entity name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: HashMap::new(),
        }
    }

    /// Adds a field definition
    pub fn with_field(mut self, property: impl Into<String>, def: FieldDef) -> Self {
        self.fields.insert(property.into(), def);
        self
    }

    /// Looks up a property's metadata
    pub fn field(&self, property: &str) -> Option<&FieldDef> {
        self.fields.get(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_def_builders() {
        let f = FieldDef::date_pattern("%d.%m.%Y").mapped("birth-date");
        assert_eq!(f.mapped_name.as_deref(), Some("birth-date"));
        assert_eq!(f.field_type, FieldType::Date);
        assert_eq!(f.format, Some(FieldFormat::pattern("%d.%m.%Y")));
    }

    #[test]
    fn test_schema_lookup() {
        let schema = EntitySchema::new("person")
            .with_field("firstName", FieldDef::text().mapped("first-name"))
            .with_field("id", FieldDef::keyword());

        assert!(schema.field("firstName").is_some());
        assert!(schema.field("id").unwrap().mapped_name.is_none());
        assert!(schema.field("unknown").is_none());
    }

    #[test]
    fn test_schema_serde_round_trip() {
        let schema = EntitySchema::new("person")
            .with_field("birthDate", FieldDef::date_pattern("%d.%m.%Y").mapped("birth-date"));

        let json = serde_json::to_string(&schema).unwrap();
        let back: EntitySchema = serde_json::from_str(&json).unwrap();
        assert_eq!(schema, back);
    }
}
