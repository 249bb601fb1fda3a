//! Scalar values, named items and numeric literals.

use crate::dimension::DimensionKind;
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// A single scalar populating one [`Dimension`](crate::Dimension).
///
/// `Int(2)` and `Double(2.0)` are distinct values; numeric dimensions
/// decide for themselves which kinds they accept (see
/// [`Dimension::check`](crate::Dimension::check)).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Real value.
    Double(f64),
    /// Categorical character value.
    Char(char),
}

impl Value {
    /// The dimension kind this value naturally belongs to.
    pub fn kind(&self) -> DimensionKind {
        match self {
            Self::Int(_) => DimensionKind::Integer,
            Self::Double(_) => DimensionKind::Double,
            Self::Char(_) => DimensionKind::Char,
        }
    }

    /// The value as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as a real number. Integers are widened; chars are `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Double(v) => Some(*v),
            Self::Char(_) => None,
        }
    }

    /// The value as a character, if it is one.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v:?}"),
            Self::Char(c) => write!(f, "{c:?}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

/// A named assignment of values, e.g. one observation or one action.
///
/// Equality is insertion-order independent: two items holding the same
/// name/value pairs compare equal however they were built.
pub type Item = IndexMap<String, Value>;

/// Build an [`Item`] from `name => value` pairs.
///
/// ```
/// use taskspace_core::{item, Value};
///
/// let it = item! { "x" => 3, "v" => 0.5 };
/// assert_eq!(it["x"], Value::Int(3));
/// assert_eq!(it["v"], Value::Double(0.5));
/// assert!(item! {}.is_empty());
/// ```
#[macro_export]
macro_rules! item {
    () => {
        $crate::Item::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut item = $crate::Item::new();
        $(
            item.insert(::std::string::String::from($name), $crate::Value::from($value));
        )+
        item
    }};
}

/// A numeric literal that remembers whether it was written as an integer.
///
/// Used for wire fields such as the discount factor, where `1` and `1.0`
/// are numerically equal but must each re-serialize as written. Only the
/// int/real distinction is kept: reals print in shortest round-trip form,
/// so canonical output round-trips but other spellings do not (`1e5` prints
/// as `100000.0`).
///
/// ```
/// use taskspace_core::Number;
///
/// let one: Number = "1".parse().unwrap();
/// assert_eq!(one.to_string(), "1");
/// assert_eq!(one, Number::Real(1.0));
/// assert_eq!("0.95".parse::<Number>().unwrap().to_string(), "0.95");
/// assert_eq!("1e5".parse::<Number>().unwrap().to_string(), "100000.0");
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Number {
    /// Written without a fractional part or exponent.
    Int(i64),
    /// Any other real literal.
    Real(f64),
}

impl Number {
    /// The literal as a real number.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int(v) => *v as f64,
            Self::Real(v) => *v,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v:?}"),
        }
    }
}

impl FromStr for Number {
    type Err = std::num::ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(v) = s.parse::<i64>() {
            return Ok(Self::Int(v));
        }
        s.parse::<f64>().map(Self::Real)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}
