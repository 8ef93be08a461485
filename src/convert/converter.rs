//! Value-to-wire-string conversion
//!
//! Converts typed criteria values into the string form the engine expects:
//! a field's declared format wins, otherwise each value type has a default
//! stringification.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};

use super::errors::{ConvertError, ConvertResult};
use crate::criteria::CriteriaValue;
use crate::schema::FieldFormat;

/// Conversion service consumed by the mapper
pub trait ValueConverter {
    /// Converts a typed value into its wire string, honoring the field's
    /// declared format when present.
    fn convert(&self, value: &CriteriaValue, format: Option<&FieldFormat>)
        -> ConvertResult<String>;
}

/// Default converter: chrono patterns for temporal values, `Display` for
/// scalars.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValueConverter;

impl DefaultValueConverter {
    /// Creates the default converter
    pub fn new() -> Self {
        Self
    }

    fn pattern_items(pattern: &str) -> ConvertResult<Vec<Item<'_>>> {
        let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(ConvertError::InvalidPattern {
                pattern: pattern.to_string(),
            });
        }
        Ok(items)
    }

    fn with_pattern(value: &CriteriaValue, pattern: &str) -> ConvertResult<String> {
        let items = Self::pattern_items(pattern)?;
        let mut out = String::new();
        let result = match value {
            CriteriaValue::Date(d) => write!(out, "{}", d.format_with_items(items.iter())),
            CriteriaValue::DateTime(dt) => write!(out, "{}", dt.format_with_items(items.iter())),
            // Already a wire string, e.g. a tree mapped twice
            CriteriaValue::Str(s) => return Ok(s.clone()),
            other => {
                return Err(ConvertError::Unconvertible {
                    value_type: other.type_name(),
                    format: pattern.to_string(),
                })
            }
        };
        // A pattern can parse yet still not apply, e.g. a time specifier
        // on a date-only value.
        result.map_err(|_| ConvertError::InvalidPattern {
            pattern: pattern.to_string(),
        })?;
        Ok(out)
    }

    fn as_epoch_millis(value: &CriteriaValue) -> ConvertResult<String> {
        match value {
            CriteriaValue::Date(d) => Ok(d
                .and_time(chrono::NaiveTime::MIN)
                .and_utc()
                .timestamp_millis()
                .to_string()),
            CriteriaValue::DateTime(dt) => Ok(dt.timestamp_millis().to_string()),
            CriteriaValue::Str(s) => Ok(s.clone()),
            CriteriaValue::Int(i) => Ok(i.to_string()),
            other => Err(ConvertError::Unconvertible {
                value_type: other.type_name(),
                format: "epoch_millis".to_string(),
            }),
        }
    }

    fn default_string(value: &CriteriaValue) -> String {
        match value {
            CriteriaValue::Str(s) => s.clone(),
            CriteriaValue::Int(i) => i.to_string(),
            CriteriaValue::Float(f) => f.to_string(),
            CriteriaValue::Bool(b) => b.to_string(),
            CriteriaValue::Date(d) => d.to_string(),
            CriteriaValue::DateTime(dt) => dt.to_rfc3339(),
        }
    }
}

impl ValueConverter for DefaultValueConverter {
    fn convert(
        &self,
        value: &CriteriaValue,
        format: Option<&FieldFormat>,
    ) -> ConvertResult<String> {
        match format {
            Some(FieldFormat::DatePattern { pattern }) => Self::with_pattern(value, pattern),
            Some(FieldFormat::EpochMillis) => Self::as_epoch_millis(value),
            None => Ok(Self::default_string(value)),
        }
    }
}
