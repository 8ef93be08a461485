//! Criteria mapper
//!
//! Rewrites a criteria tree against entity metadata: logical property
//! names become physical document field names, typed values become their
//! wire-string form. The result is a new tree; the caller's tree is left
//! untouched and stays reusable.

use super::errors::{MappingError, MappingResult};
use crate::convert::ValueConverter;
use crate::criteria::{Criteria, CriteriaQuery, CriteriaValue, SortSpec, SubCriteria};
use crate::schema::FieldResolver;

/// Maps criteria trees for one entity metadata source and one converter.
pub struct CriteriaMapper<'a, R: FieldResolver, C: ValueConverter> {
    resolver: &'a R,
    converter: &'a C,
}

impl<'a, R: FieldResolver, C: ValueConverter> CriteriaMapper<'a, R, C> {
    /// Creates a new mapper
    pub fn new(resolver: &'a R, converter: &'a C) -> Self {
        Self {
            resolver,
            converter,
        }
    }

    /// Maps a whole query container against the given entity type.
    ///
    /// The criteria tree and the sort field name are rewritten; paging is
    /// copied verbatim.
    pub fn map_query(&self, query: &CriteriaQuery, entity: &str) -> MappingResult<CriteriaQuery> {
        Ok(CriteriaQuery {
            criteria: self.map_criteria(&query.criteria, entity)?,
            sort: query.sort.as_ref().map(|sort| SortSpec {
                field: self.resolve_name(entity, &sort.field),
                direction: sort.direction,
            }),
            from: query.from,
            size: query.size,
        })
    }

    /// Maps a criteria tree against the given entity type, pre-order.
    ///
    /// Name resolution is best-effort: unresolved properties keep their
    /// logical name. Value conversion failures abort the whole mapping.
    pub fn map_criteria(&self, criteria: &Criteria, entity: &str) -> MappingResult<Criteria> {
        let values = criteria
            .values
            .iter()
            .map(|value| self.map_value(entity, &criteria.field, value))
            .collect::<MappingResult<Vec<_>>>()?;

        let sub_criteria = criteria
            .sub_criteria
            .iter()
            .map(|sub| {
                Ok(SubCriteria {
                    connector: sub.connector,
                    criteria: self.map_criteria(&sub.criteria, entity)?,
                })
            })
            .collect::<MappingResult<Vec<_>>>()?;

        Ok(Criteria {
            field: self.resolve_name(entity, &criteria.field),
            operator: criteria.operator,
            values,
            boost: criteria.boost,
            negated: criteria.negated,
            sub_criteria,
        })
    }

    fn resolve_name(&self, entity: &str, property: &str) -> String {
        self.resolver
            .resolve_field_name(entity, property)
            .unwrap_or(property)
            .to_string()
    }

    fn map_value(
        &self,
        entity: &str,
        property: &str,
        value: &CriteriaValue,
    ) -> MappingResult<CriteriaValue> {
        // The format is declared against the logical property name.
        let format = self.resolver.resolve_field_format(entity, property);
        let wire = self
            .converter
            .convert(value, format)
            .map_err(|source| MappingError::Conversion {
                field: property.to_string(),
                source,
            })?;
        Ok(CriteriaValue::Str(wire))
    }
}
