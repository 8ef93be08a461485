//! Value conversion subsystem
//!
//! Turns typed criteria values into their on-wire string representation.
//! The mapper consumes this through the [`ValueConverter`] trait;
//! [`DefaultValueConverter`] handles chrono date patterns, epoch
//! milliseconds, and default stringification of scalars.

mod converter;
mod errors;

pub use converter::{DefaultValueConverter, ValueConverter};
pub use errors::{ConvertError, ConvertResult};
