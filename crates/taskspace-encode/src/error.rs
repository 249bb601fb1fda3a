//! Error type for the encoders.

use std::fmt;

/// Errors from encoding or decoding flat tuples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// A state-action input had neither one nor two items.
    IllegalArity {
        /// Number of items supplied.
        arity: usize,
    },
    /// A tuple's length matches no accepted layout.
    LengthMismatch {
        /// Longest accepted length.
        expected: usize,
        /// Length supplied.
        found: usize,
    },
    /// The item lacks a field of the space.
    MissingField {
        /// The absent field.
        field: String,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalArity { arity } => {
                write!(f, "expected (state) or (state, action), got {arity} item(s)")
            }
            Self::LengthMismatch { expected, found } => {
                write!(f, "tuple length {found} does not match expected {expected}")
            }
            Self::MissingField { field } => write!(f, "item has no field '{field}'"),
        }
    }
}

impl std::error::Error for EncodeError {}
