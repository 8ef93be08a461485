//! Criteria tree structures
//!
//! A criteria tree is built once by the caller against logical entity
//! properties, rewritten by the mapper, then rendered by the compiler.
//! The shape is immutable after construction; the mapper produces a new
//! tree rather than mutating the caller's.

use super::value::CriteriaValue;

/// Comparison operators a criterion can carry.
///
/// This is a closed set: the compiler matches exhaustively, so adding an
/// operator is a compile-time-checked change. `Within` and `BoundingBox`
/// belong to the geo-filter pipeline and have no boolean-query rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Full-text equality rendered as a `query_string` query
    Equals,
    /// Inclusive range with two bounds
    Between,
    /// Exclusive upper bound
    LessThan,
    /// Inclusive upper bound
    LessThanEqual,
    /// Exclusive lower bound
    GreaterThan,
    /// Inclusive lower bound
    GreaterThanEqual,
    /// Membership in a value set, rendered as a `terms` query
    In,
    /// Negated membership
    NotIn,
    /// Analyzed full-text match
    Matches,
    /// Substring wildcard search
    Contains,
    /// Prefix wildcard search
    StartsWith,
    /// Suffix wildcard search
    EndsWith,
    /// Raw query-string expression, passed through unescaped
    Expression,
    /// Fuzzy term query
    Fuzzy,
    /// Field-presence check, takes no values
    Exists,
    /// Geo-shape containment (not compiled here)
    Within,
    /// Geo bounding box (not compiled here)
    BoundingBox,
}

impl Operator {
    /// Returns the operator name for error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::Between => "between",
            Operator::LessThan => "less_than",
            Operator::LessThanEqual => "less_than_equal",
            Operator::GreaterThan => "greater_than",
            Operator::GreaterThanEqual => "greater_than_equal",
            Operator::In => "in",
            Operator::NotIn => "not_in",
            Operator::Matches => "matches",
            Operator::Contains => "contains",
            Operator::StartsWith => "starts_with",
            Operator::EndsWith => "ends_with",
            Operator::Expression => "expression",
            Operator::Fuzzy => "fuzzy",
            Operator::Exists => "exists",
            Operator::Within => "within",
            Operator::BoundingBox => "bounding_box",
        }
    }
}

/// Logical connector between a sub-criteria entry and the result
/// accumulated to its left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    /// Returns the bool-query array key this connector combines into
    pub fn array_key(&self) -> &'static str {
        match self {
            Connector::And => "must",
            Connector::Or => "should",
        }
    }
}

/// A child criteria entry with the connector that joins it to its left
/// sibling (or to the parent's own clause).
#[derive(Debug, Clone, PartialEq)]
pub struct SubCriteria {
    /// How this entry combines with the accumulated result
    pub connector: Connector,
    /// The child tree
    pub criteria: Criteria,
}

/// One node of a criteria tree: an optional comparison of its own plus an
/// ordered list of connected children.
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    /// Logical property name; the mapper rewrites it to the physical
    /// document field name
    pub field: String,
    /// Comparison carried by this node, if any
    pub operator: Option<Operator>,
    /// Operator arguments (arity depends on the operator)
    pub values: Vec<CriteriaValue>,
    /// Relevance weight; 1.0 means unweighted
    pub boost: f32,
    /// When set, the rendered clause is wrapped in `bool.must_not`
    pub negated: bool,
    /// Connected children, combined left to right
    pub sub_criteria: Vec<SubCriteria>,
}

impl Criteria {
    /// Creates a criteria node for the given logical property, with no
    /// comparison attached yet.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: None,
            values: Vec::new(),
            boost: 1.0,
            negated: false,
            sub_criteria: Vec::new(),
        }
    }

    fn with_op(mut self, operator: Operator, values: Vec<CriteriaValue>) -> Self {
        self.operator = Some(operator);
        self.values = values;
        self
    }

    /// Equality comparison (`query_string` query)
    pub fn is(self, value: impl Into<CriteriaValue>) -> Self {
        self.with_op(Operator::Equals, vec![value.into()])
    }

    /// Inclusive range with both bounds
    pub fn between(
        self,
        lower: impl Into<CriteriaValue>,
        upper: impl Into<CriteriaValue>,
    ) -> Self {
        self.with_op(Operator::Between, vec![lower.into(), upper.into()])
    }

    /// Strictly less than
    pub fn less_than(self, value: impl Into<CriteriaValue>) -> Self {
        self.with_op(Operator::LessThan, vec![value.into()])
    }

    /// Less than or equal
    pub fn less_than_equal(self, value: impl Into<CriteriaValue>) -> Self {
        self.with_op(Operator::LessThanEqual, vec![value.into()])
    }

    /// Strictly greater than
    pub fn greater_than(self, value: impl Into<CriteriaValue>) -> Self {
        self.with_op(Operator::GreaterThan, vec![value.into()])
    }

    /// Greater than or equal
    pub fn greater_than_equal(self, value: impl Into<CriteriaValue>) -> Self {
        self.with_op(Operator::GreaterThanEqual, vec![value.into()])
    }

    /// Membership in a value set
    pub fn in_values(self, values: impl IntoIterator<Item = impl Into<CriteriaValue>>) -> Self {
        self.with_op(Operator::In, values.into_iter().map(Into::into).collect())
    }

    /// Negated membership
    pub fn not_in(self, values: impl IntoIterator<Item = impl Into<CriteriaValue>>) -> Self {
        self.with_op(Operator::NotIn, values.into_iter().map(Into::into).collect())
    }

    /// Analyzed full-text match
    pub fn matches(self, value: impl Into<CriteriaValue>) -> Self {
        self.with_op(Operator::Matches, vec![value.into()])
    }

    /// Substring search (wildcard on both sides)
    pub fn contains(self, value: impl Into<CriteriaValue>) -> Self {
        self.with_op(Operator::Contains, vec![value.into()])
    }

    /// Prefix search
    pub fn starts_with(self, value: impl Into<CriteriaValue>) -> Self {
        self.with_op(Operator::StartsWith, vec![value.into()])
    }

    /// Suffix search
    pub fn ends_with(self, value: impl Into<CriteriaValue>) -> Self {
        self.with_op(Operator::EndsWith, vec![value.into()])
    }

    /// Raw query-string expression
    pub fn expression(self, value: impl Into<CriteriaValue>) -> Self {
        self.with_op(Operator::Expression, vec![value.into()])
    }

    /// Fuzzy term comparison
    pub fn fuzzy(self, value: impl Into<CriteriaValue>) -> Self {
        self.with_op(Operator::Fuzzy, vec![value.into()])
    }

    /// Field-presence check
    pub fn exists(self) -> Self {
        self.with_op(Operator::Exists, Vec::new())
    }

    /// Sets the relevance weight for this node's clause
    pub fn boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// Negates this node's clause
    pub fn not(mut self) -> Self {
        self.negated = true;
        self
    }

    /// Attaches a child combined with AND
    pub fn and(mut self, other: Criteria) -> Self {
        self.sub_criteria.push(SubCriteria {
            connector: Connector::And,
            criteria: other,
        });
        self
    }

    /// Attaches a child combined with OR
    pub fn or(mut self, other: Criteria) -> Self {
        self.sub_criteria.push(SubCriteria {
            connector: Connector::Or,
            criteria: other,
        });
        self
    }

    /// Returns true if this node carries neither a comparison nor children
    pub fn is_empty(&self) -> bool {
        self.operator.is_none() && self.sub_criteria.is_empty()
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort specification carried by the query container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to sort by (logical before mapping, physical after)
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Root query container: one criteria tree plus paging/sort metadata.
///
/// Paging and sort are carried through mapping (the sort field name is
/// rewritten) but not rendered by the compiler.
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaQuery {
    /// The top-level criteria tree
    pub criteria: Criteria,
    /// Sort specification, if any
    pub sort: Option<SortSpec>,
    /// Result offset
    pub from: Option<u64>,
    /// Result count limit
    pub size: Option<u64>,
}

impl CriteriaQuery {
    /// Creates a query for the given criteria tree
    pub fn new(criteria: Criteria) -> Self {
        Self {
            criteria,
            sort: None,
            from: None,
            size: None,
        }
    }

    /// Sets the sort specification
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the result offset
    pub fn with_from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the result count limit
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}
