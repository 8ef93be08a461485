//! Typed criteria values
//!
//! Criteria are built against entity properties with their native Rust types.
//! The mapper later rewrites every value into its wire-string form, so after
//! mapping a tree only carries `Str` values.

use chrono::{DateTime, NaiveDate, Utc};

/// A single typed literal attached to a criterion.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaValue {
    /// UTF-8 string, used verbatim on the wire
    Str(String),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Calendar date without time zone
    Date(NaiveDate),
    /// Instant in UTC
    DateTime(DateTime<Utc>),
}

impl CriteriaValue {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CriteriaValue::Str(_) => "str",
            CriteriaValue::Int(_) => "int",
            CriteriaValue::Float(_) => "float",
            CriteriaValue::Bool(_) => "bool",
            CriteriaValue::Date(_) => "date",
            CriteriaValue::DateTime(_) => "datetime",
        }
    }

    /// Renders the value as a JSON value for query documents.
    ///
    /// Temporal values use their default stringification; mapped trees only
    /// contain `Str` values, so this branch matters for unmapped input.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CriteriaValue::Str(s) => serde_json::Value::String(s.clone()),
            CriteriaValue::Int(i) => serde_json::Value::from(*i),
            CriteriaValue::Float(f) => serde_json::Value::from(*f),
            CriteriaValue::Bool(b) => serde_json::Value::Bool(*b),
            CriteriaValue::Date(d) => serde_json::Value::String(d.to_string()),
            CriteriaValue::DateTime(dt) => serde_json::Value::String(dt.to_rfc3339()),
        }
    }
}

impl From<&str> for CriteriaValue {
    fn from(s: &str) -> Self {
        CriteriaValue::Str(s.to_string())
    }
}

impl From<String> for CriteriaValue {
    fn from(s: String) -> Self {
        CriteriaValue::Str(s)
    }
}

impl From<i64> for CriteriaValue {
    fn from(i: i64) -> Self {
        CriteriaValue::Int(i)
    }
}

impl From<i32> for CriteriaValue {
    fn from(i: i32) -> Self {
        CriteriaValue::Int(i64::from(i))
    }
}

impl From<f64> for CriteriaValue {
    fn from(f: f64) -> Self {
        CriteriaValue::Float(f)
    }
}

impl From<bool> for CriteriaValue {
    fn from(b: bool) -> Self {
        CriteriaValue::Bool(b)
    }
}

impl From<NaiveDate> for CriteriaValue {
    fn from(d: NaiveDate) -> Self {
        CriteriaValue::Date(d)
    }
}

impl From<DateTime<Utc>> for CriteriaValue {
    fn from(dt: DateTime<Utc>) -> Self {
        CriteriaValue::DateTime(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_names() {
        assert_eq!(CriteriaValue::from("x").type_name(), "str");
        assert_eq!(CriteriaValue::from(1i64).type_name(), "int");
        assert_eq!(CriteriaValue::from(true).type_name(), "bool");
    }

    #[test]
    fn test_to_json_scalars() {
        assert_eq!(CriteriaValue::from("John").to_json(), json!("John"));
        assert_eq!(CriteriaValue::from(42i64).to_json(), json!(42));
        assert_eq!(CriteriaValue::from(false).to_json(), json!(false));
    }

    #[test]
    fn test_to_json_date_is_iso() {
        let d = NaiveDate::from_ymd_opt(1989, 11, 9).unwrap();
        assert_eq!(CriteriaValue::Date(d).to_json(), json!("1989-11-09"));
    }
}
