//! Criteria data model
//!
//! A criteria tree describes a query against logical entity properties:
//! each node carries an optional comparison (operator + typed values, boost,
//! negation) and an ordered list of children, each joined by an AND/OR
//! connector to the result accumulated to its left.
//!
//! Trees are built fluently:
//!
//! ```
//! use escriteria::criteria::Criteria;
//! use chrono::NaiveDate;
//!
//! let criteria = Criteria::new("birthDate")
//!     .between(
//!         NaiveDate::from_ymd_opt(1989, 11, 9).unwrap(),
//!         NaiveDate::from_ymd_opt(1990, 11, 9).unwrap(),
//!     )
//!     .or(Criteria::new("birthDate").is(NaiveDate::from_ymd_opt(2019, 12, 28).unwrap()));
//!
//! assert_eq!(criteria.sub_criteria.len(), 1);
//! ```

mod ast;
mod value;

pub use ast::{Connector, Criteria, CriteriaQuery, Operator, SortDirection, SortSpec, SubCriteria};
pub use value::CriteriaValue;
