//! Criteria-to-query compilation
//!
//! Renders a mapped criteria tree into the engine's boolean-query document.
//! Leaf criteria become `range`/`match`/`query_string`/`terms`/`exists`/
//! `fuzzy` clauses; connected siblings are combined into `bool.must` /
//! `bool.should` arrays; negation wraps a clause in `bool.must_not`.
//!
//! A lone clause is emitted unwrapped; only multi-clause combinations
//! introduce a `bool` block.

use serde_json::{json, Map, Value};

use super::errors::{CompilerError, CompilerResult};
use crate::criteria::{Connector, Criteria, CriteriaValue, Operator};

/// Renders mapped criteria trees into query documents
pub struct QueryCompiler;

impl QueryCompiler {
    /// Compiles a criteria tree into a query document.
    ///
    /// Returns `Ok(None)` for an empty tree (no operator, no sub-criteria),
    /// which propagates as "no filter". Compilation is read-only and
    /// all-or-nothing.
    pub fn create_query(criteria: &Criteria) -> CompilerResult<Option<Value>> {
        Self::compile(criteria)
    }

    fn compile(criteria: &Criteria) -> CompilerResult<Option<Value>> {
        let mut acc: Option<Value> = match criteria.operator {
            Some(op) => Some(Self::render_clause(criteria, op)?),
            None => None,
        };
        // Connector the accumulator was last combined with at this level;
        // the connector of the first contributor is ignored.
        let mut acc_connector: Option<Connector> = None;

        for sub in &criteria.sub_criteria {
            let child = match Self::compile(&sub.criteria)? {
                Some(child) => child,
                None => continue,
            };
            acc = Some(match acc.take() {
                None => child,
                Some(prev) => {
                    let combined = Self::combine(prev, child, sub.connector, acc_connector);
                    acc_connector = Some(sub.connector);
                    combined
                }
            });
        }

        Ok(acc)
    }

    /// Combines two compiled documents with the given connector.
    ///
    /// When the accumulator was built at this level with the same
    /// connector, the new clause is appended to its existing array;
    /// otherwise a fresh `bool` block wraps both.
    fn combine(
        prev: Value,
        next: Value,
        connector: Connector,
        prev_connector: Option<Connector>,
    ) -> Value {
        let key = connector.array_key();
        if prev_connector == Some(connector) {
            let mut prev = prev;
            if let Some(array) = prev
                .get_mut("bool")
                .and_then(|b| b.get_mut(key))
                .and_then(Value::as_array_mut)
            {
                array.push(next);
                return prev;
            }
            return json!({ "bool": { key: [prev, next] } });
        }
        json!({ "bool": { key: [prev, next] } })
    }

    fn render_clause(criteria: &Criteria, op: Operator) -> CompilerResult<Value> {
        if criteria.field.is_empty() {
            return Err(CompilerError::invalid(
                &criteria.field,
                "rendered criterion has no field name",
            ));
        }
        let clause = Self::render_operator(criteria, op)?;
        Ok(if criteria.negated {
            json!({ "bool": { "must_not": [clause] } })
        } else {
            clause
        })
    }

    fn render_operator(criteria: &Criteria, op: Operator) -> CompilerResult<Value> {
        let field = criteria.field.as_str();
        let boost = criteria.boost;

        let clause = match op {
            Operator::Between => {
                if criteria.values.len() != 2 {
                    return Err(CompilerError::invalid(
                        field,
                        format!(
                            "between requires exactly 2 values, found {}",
                            criteria.values.len()
                        ),
                    ));
                }
                let mut params = Map::new();
                params.insert("from".into(), criteria.values[0].to_json());
                params.insert("to".into(), criteria.values[1].to_json());
                params.insert("include_lower".into(), Value::Bool(true));
                params.insert("include_upper".into(), Value::Bool(true));
                Self::apply_boost(&mut params, boost);
                json!({ "range": { field: params } })
            }

            Operator::LessThan => Self::range_bound(criteria, op, "lt")?,
            Operator::LessThanEqual => Self::range_bound(criteria, op, "lte")?,
            Operator::GreaterThan => Self::range_bound(criteria, op, "gt")?,
            Operator::GreaterThanEqual => Self::range_bound(criteria, op, "gte")?,

            Operator::Matches => {
                let mut params = Map::new();
                params.insert("query".into(), Self::single_text(criteria, op)?.into());
                Self::apply_boost(&mut params, boost);
                json!({ "match": { field: params } })
            }

            Operator::Equals | Operator::Expression => {
                Self::query_string(field, boost, Self::single_text(criteria, op)?, false)
            }
            Operator::Contains => {
                let text = format!("*{}*", Self::single_text(criteria, op)?);
                Self::query_string(field, boost, text, true)
            }
            Operator::StartsWith => {
                let text = format!("{}*", Self::single_text(criteria, op)?);
                Self::query_string(field, boost, text, true)
            }
            Operator::EndsWith => {
                let text = format!("*{}", Self::single_text(criteria, op)?);
                Self::query_string(field, boost, text, true)
            }

            Operator::In | Operator::NotIn => {
                if criteria.values.is_empty() {
                    return Err(CompilerError::invalid(
                        field,
                        format!("{} requires at least one value", op.as_str()),
                    ));
                }
                let terms: Vec<Value> =
                    criteria.values.iter().map(CriteriaValue::to_json).collect();
                let mut params = Map::new();
                params.insert(field.to_string(), Value::Array(terms));
                Self::apply_boost(&mut params, boost);
                let terms_query = json!({ "terms": params });
                if op == Operator::NotIn {
                    json!({ "bool": { "must_not": [terms_query] } })
                } else {
                    terms_query
                }
            }

            Operator::Fuzzy => {
                let mut params = Map::new();
                params.insert("value".into(), Self::single_text(criteria, op)?.into());
                Self::apply_boost(&mut params, boost);
                json!({ "fuzzy": { field: params } })
            }

            Operator::Exists => {
                if !criteria.values.is_empty() {
                    return Err(CompilerError::invalid(field, "exists takes no values"));
                }
                let mut params = Map::new();
                params.insert("field".into(), field.into());
                Self::apply_boost(&mut params, boost);
                json!({ "exists": params })
            }

            // Geo operators belong to the filter pipeline, not the
            // boolean-query document.
            Operator::Within | Operator::BoundingBox => {
                return Err(CompilerError::UnsupportedOperator(op))
            }
        };

        Ok(clause)
    }

    /// Single-bound range clause, e.g. `{"range": {field: {"lt": v}}}`
    fn range_bound(criteria: &Criteria, op: Operator, bound: &str) -> CompilerResult<Value> {
        let field = criteria.field.as_str();
        let value = Self::single_value(criteria, op)?;
        let mut params = Map::new();
        params.insert(bound.to_string(), value.to_json());
        Self::apply_boost(&mut params, criteria.boost);
        Ok(json!({ "range": { field: params } }))
    }

    /// `query_string` clause with the field-boost suffix convention;
    /// the boost always travels in the `fields` entry, even at 1.0.
    fn query_string(field: &str, boost: f32, query: String, wildcard: bool) -> Value {
        let mut params = Map::new();
        params.insert("query".into(), Value::String(query));
        params.insert("fields".into(), json!([format!("{}^{:?}", field, boost)]));
        if wildcard {
            params.insert("analyze_wildcard".into(), Value::Bool(true));
        }
        json!({ "query_string": params })
    }

    /// A clause-level `boost` key is only emitted when it differs from
    /// the default.
    fn apply_boost(params: &mut Map<String, Value>, boost: f32) {
        if boost != 1.0 {
            params.insert("boost".into(), Value::from(boost));
        }
    }

    fn single_value<'a>(criteria: &'a Criteria, op: Operator) -> CompilerResult<&'a CriteriaValue> {
        criteria.values.first().ok_or_else(|| {
            CompilerError::invalid(
                &criteria.field,
                format!("{} requires a value", op.as_str()),
            )
        })
    }

    /// The query text for full-text clauses; mapped trees carry strings
    /// here, unmapped values fall back to their unquoted wire rendering.
    fn single_text(criteria: &Criteria, op: Operator) -> CompilerResult<String> {
        let value = Self::single_value(criteria, op)?;
        Ok(match value.to_json() {
            Value::String(s) => s,
            other => other.to_string(),
        })
    }
}
