//! Criteria Mapping Tests
//!
//! End-to-end tests for mapping a criteria tree against entity metadata
//! and compiling it into a query document:
//! - logical property names become physical field names
//! - typed date values are rendered with the field's custom pattern
//! - unresolved names pass through unchanged

use chrono::NaiveDate;
use serde_json::json;

use escriteria::compiler::QueryCompiler;
use escriteria::convert::DefaultValueConverter;
use escriteria::criteria::{Criteria, CriteriaQuery, SortSpec};
use escriteria::mapper::CriteriaMapper;
use escriteria::schema::{EntitySchema, FieldDef, MappingRegistry};

// =============================================================================
// Helper Functions
// =============================================================================

fn person_registry() -> MappingRegistry {
    let mut registry = MappingRegistry::new();
    registry.register(
        EntitySchema::new("person")
            .with_field("id", FieldDef::keyword())
            .with_field("firstName", FieldDef::text().mapped("first-name"))
            .with_field("lastName", FieldDef::text().mapped("last-name"))
            .with_field(
                "birthDate",
                FieldDef::date_pattern("%d.%m.%Y").mapped("birth-date"),
            ),
    );
    registry
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn map_and_compile(criteria: &Criteria) -> serde_json::Value {
    let registry = person_registry();
    let converter = DefaultValueConverter::new();
    let mapper = CriteriaMapper::new(&registry, &converter);
    let mapped = mapper.map_criteria(criteria, "person").unwrap();
    QueryCompiler::create_query(&mapped).unwrap().unwrap()
}

// =============================================================================
// Name And Value Mapping
// =============================================================================

/// Date criteria built with POJO-style property names and typed values
/// compile to physical field names and pattern-formatted strings.
#[test]
fn test_maps_names_and_converts_values_in_criteria_query() {
    let criteria = Criteria::new("birthDate")
        .between(date(1989, 11, 9), date(1990, 11, 9))
        .or(Criteria::new("birthDate").is(date(2019, 12, 28)));

    let document = map_and_compile(&criteria);

    assert_eq!(
        document,
        json!({
            "bool": {
                "should": [
                    {
                        "range": {
                            "birth-date": {
                                "from": "09.11.1989",
                                "to": "09.11.1990",
                                "include_lower": true,
                                "include_upper": true
                            }
                        }
                    },
                    {
                        "query_string": {
                            "query": "28.12.2019",
                            "fields": ["birth-date^1.0"]
                        }
                    }
                ]
            }
        })
    );
}

/// Nested sub-criteria are mapped and compiled recursively: the parent
/// match clause comes first, the nested chain keeps its own bool block.
#[test]
fn test_maps_names_and_values_in_sub_criteria_query() {
    let criteria = Criteria::new("firstName").matches("John").and(
        Criteria::new("birthDate")
            .between(date(1989, 11, 9), date(1990, 11, 9))
            .or(Criteria::new("birthDate").is(date(2019, 12, 28))),
    );

    let document = map_and_compile(&criteria);

    assert_eq!(
        document,
        json!({
            "bool": {
                "must": [
                    {
                        "match": {
                            "first-name": { "query": "John" }
                        }
                    },
                    {
                        "bool": {
                            "should": [
                                {
                                    "range": {
                                        "birth-date": {
                                            "from": "09.11.1989",
                                            "to": "09.11.1990",
                                            "include_lower": true,
                                            "include_upper": true
                                        }
                                    }
                                },
                                {
                                    "query_string": {
                                        "query": "28.12.2019",
                                        "fields": ["birth-date^1.0"]
                                    }
                                }
                            ]
                        }
                    }
                ]
            }
        })
    );
}

// =============================================================================
// Passthrough Policy
// =============================================================================

/// Properties without a physical name mapping keep their logical name,
/// both for unknown properties and for known but unmapped ones.
#[test]
fn test_unresolved_names_pass_through() {
    let registry = person_registry();
    let converter = DefaultValueConverter::new();
    let mapper = CriteriaMapper::new(&registry, &converter);

    let criteria = Criteria::new("nickname")
        .is("Johnny")
        .and(Criteria::new("id").is("person-1"));
    let mapped = mapper.map_criteria(&criteria, "person").unwrap();

    assert_eq!(mapped.field, "nickname");
    assert_eq!(mapped.sub_criteria[0].criteria.field, "id");
}

/// Mapping against an unregistered entity is a full identity passthrough
/// of every field name.
#[test]
fn test_unknown_entity_is_identity_passthrough() {
    let registry = person_registry();
    let converter = DefaultValueConverter::new();
    let mapper = CriteriaMapper::new(&registry, &converter);

    let criteria = Criteria::new("firstName").matches("John");
    let mapped = mapper.map_criteria(&criteria, "order").unwrap();

    assert_eq!(mapped.field, "firstName");
}

// =============================================================================
// Query Container
// =============================================================================

/// The query container maps its criteria tree and sort field; paging is
/// carried verbatim.
#[test]
fn test_query_container_maps_sort_field() {
    let registry = person_registry();
    let converter = DefaultValueConverter::new();
    let mapper = CriteriaMapper::new(&registry, &converter);

    let query = CriteriaQuery::new(Criteria::new("lastName").is("Smith"))
        .with_sort(SortSpec::desc("birthDate"))
        .with_from(20)
        .with_size(10);
    let mapped = mapper.map_query(&query, "person").unwrap();

    assert_eq!(mapped.criteria.field, "last-name");
    assert_eq!(mapped.sort.unwrap().field, "birth-date");
    assert_eq!(mapped.from, Some(20));
    assert_eq!(mapped.size, Some(10));
}

// =============================================================================
// Determinism
// =============================================================================

/// Compiling the same mapped tree twice yields byte-identical documents.
#[test]
fn test_compilation_is_deterministic() {
    let registry = person_registry();
    let converter = DefaultValueConverter::new();
    let mapper = CriteriaMapper::new(&registry, &converter);

    let criteria = Criteria::new("firstName")
        .matches("John")
        .and(Criteria::new("birthDate").between(date(1989, 11, 9), date(1990, 11, 9)));
    let mapped = mapper.map_criteria(&criteria, "person").unwrap();

    let first = QueryCompiler::create_query(&mapped).unwrap().unwrap();
    let second = QueryCompiler::create_query(&mapped).unwrap().unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

/// Mapping produces a new tree; the caller's tree is reusable and a second
/// mapping of it gives the same result.
#[test]
fn test_mapping_is_a_pure_transform() {
    let registry = person_registry();
    let converter = DefaultValueConverter::new();
    let mapper = CriteriaMapper::new(&registry, &converter);

    let criteria = Criteria::new("birthDate").is(date(2019, 12, 28));
    let before = criteria.clone();

    let first = mapper.map_criteria(&criteria, "person").unwrap();
    assert_eq!(criteria, before);

    let second = mapper.map_criteria(&criteria, "person").unwrap();
    assert_eq!(first, second);
}
