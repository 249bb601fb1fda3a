//! The validation error shared by spaces and mappings.

use crate::dimension::DimensionKind;
use crate::value::Value;
use std::error::Error;
use std::fmt;

/// Which side of a range a value fell off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Below the lower bound.
    Min,
    /// Above the upper bound.
    Max,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => write!(f, "min"),
            Self::Max => write!(f, "max"),
        }
    }
}

/// A value does not belong to a declared space.
///
/// Raised by space membership checks and at every mapping boundary.
/// It always signals a contract violation between two models and is
/// never swallowed or clamped away.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    /// A value lies outside its dimension's inclusive range.
    OutOfBounds {
        /// Name of the offending field.
        field: String,
        /// The rejected value.
        value: Value,
        /// The bound that was crossed.
        bound: Bound,
        /// The value of that bound.
        limit: Value,
    },
    /// A real value is NaN.
    NotANumber {
        /// Name of the offending field.
        field: String,
    },
    /// The value's kind is not admissible for the dimension.
    KindMismatch {
        /// Name of the offending field.
        field: String,
        /// Kind of the declared dimension.
        expected: DimensionKind,
        /// Kind of the supplied value.
        found: DimensionKind,
    },
    /// The item lacks a field declared by the space.
    MissingField {
        /// Name of the missing field.
        field: String,
    },
    /// The item carries a field the space does not declare.
    UnknownField {
        /// Name of the unexpected field.
        field: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                field,
                value,
                bound,
                limit,
            } => match bound {
                Bound::Min => write!(f, "field '{field}': {value} is below min {limit}"),
                Bound::Max => write!(f, "field '{field}': {value} is above max {limit}"),
            },
            Self::NotANumber { field } => write!(f, "field '{field}': value is NaN"),
            Self::KindMismatch {
                field,
                expected,
                found,
            } => {
                write!(f, "field '{field}': expected {expected} value, got {found}")
            }
            Self::MissingField { field } => write!(f, "missing field '{field}'"),
            Self::UnknownField { field } => write!(f, "unknown field '{field}'"),
        }
    }
}

impl Error for ValidationError {}
