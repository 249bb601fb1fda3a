//! The scalar axes of a problem description.

use crate::error::{Bound, ValidationError};
use crate::value::Value;
use std::fmt;

/// The closed set of dimension kinds.
///
/// The derived ordering (`Integer < Double < Char`) is the canonical kind
/// order used whenever a space lists its names or describes its ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DimensionKind {
    /// Inclusive integer range.
    Integer,
    /// Inclusive real range.
    Double,
    /// Unbounded categorical slot.
    Char,
}

impl DimensionKind {
    /// All kinds in canonical order.
    pub const ALL: [DimensionKind; 3] = [Self::Integer, Self::Double, Self::Char];

    /// Section keyword used when listing names of this kind
    /// (`INTS`, `DOUBLES`, `CHARS`).
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Integer => "INTS",
            Self::Double => "DOUBLES",
            Self::Char => "CHARS",
        }
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Double => write!(f, "double"),
            Self::Char => write!(f, "char"),
        }
    }
}

/// One scalar axis of an observation or action space.
///
/// Equality is structural: same kind and same bounds. An `Integer` is
/// never equal to a `Double` with the same bounds, and all `Char`
/// dimensions are equal. `min <= max` is not enforced.
///
/// # Examples
///
/// ```
/// use taskspace_core::{Dimension, DimensionKind};
///
/// let d = Dimension::integer(0, 4);
/// assert_eq!(d.kind(), DimensionKind::Integer);
/// assert_eq!(d.to_string(), "(0 4)");
///
/// let v = Dimension::double(-0.07, 0.07);
/// assert_eq!(v.to_string(), "(-0.070000 0.070000)");
/// assert_ne!(Dimension::integer(0, 1), Dimension::double(0.0, 1.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    /// Inclusive integer range `[min, max]`.
    Integer {
        /// Lower bound (inclusive).
        min: i64,
        /// Upper bound (inclusive).
        max: i64,
    },
    /// Inclusive real range `[min, max]`.
    Double {
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },
    /// Categorical slot with no bounds.
    Char,
}

impl Dimension {
    /// Construct an integer dimension.
    pub const fn integer(min: i64, max: i64) -> Self {
        Self::Integer { min, max }
    }

    /// Construct a real dimension.
    pub const fn double(min: f64, max: f64) -> Self {
        Self::Double { min, max }
    }

    /// The kind of this dimension.
    pub fn kind(&self) -> DimensionKind {
        match self {
            Self::Integer { .. } => DimensionKind::Integer,
            Self::Double { .. } => DimensionKind::Double,
            Self::Char => DimensionKind::Char,
        }
    }

    /// `true` for `Integer` and `Double`.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Char)
    }

    /// Bounds as reals, or `None` for `Char`.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Integer { min, max } => Some((min as f64, max as f64)),
            Self::Double { min, max } => Some((min, max)),
            Self::Char => None,
        }
    }

    /// Width of the range (`max - min`), or `None` for `Char`.
    pub fn range(&self) -> Option<f64> {
        self.bounds().map(|(min, max)| max - min)
    }

    /// Check that `value` is admissible for this dimension.
    ///
    /// Integer dimensions accept only [`Value::Int`]. Double dimensions
    /// accept both numeric kinds. Char dimensions accept only
    /// [`Value::Char`]. `field` is used to label the error.
    pub fn check(&self, field: &str, value: &Value) -> Result<(), ValidationError> {
        match (*self, *value) {
            (Self::Integer { min, max }, Value::Int(v)) => {
                if v < min {
                    return Err(out_of_bounds(field, *value, Bound::Min, Value::Int(min)));
                }
                if v > max {
                    return Err(out_of_bounds(field, *value, Bound::Max, Value::Int(max)));
                }
                Ok(())
            }
            (Self::Double { min, max }, Value::Int(_) | Value::Double(_)) => {
                let v = value.as_f64().unwrap_or(f64::NAN);
                if v.is_nan() {
                    return Err(ValidationError::NotANumber {
                        field: field.to_string(),
                    });
                }
                if v < min {
                    return Err(out_of_bounds(field, *value, Bound::Min, Value::Double(min)));
                }
                if v > max {
                    return Err(out_of_bounds(field, *value, Bound::Max, Value::Double(max)));
                }
                Ok(())
            }
            (Self::Char, Value::Char(_)) => Ok(()),
            _ => Err(ValidationError::KindMismatch {
                field: field.to_string(),
                expected: self.kind(),
                found: value.kind(),
            }),
        }
    }
}

fn out_of_bounds(field: &str, value: Value, bound: Bound, limit: Value) -> ValidationError {
    ValidationError::OutOfBounds {
        field: field.to_string(),
        value,
        bound,
        limit,
    }
}

/// `Integer` prints `(min max)`, `Double` prints `(min max)` with six
/// decimals. `Char` has no bounds and prints as `CHAR`; space descriptions
/// only ever count char dimensions.
impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer { min, max } => write!(f, "({min} {max})"),
            Self::Double { min, max } => write!(f, "({min:.6} {max:.6})"),
            Self::Char => write!(f, "CHAR"),
        }
    }
}
