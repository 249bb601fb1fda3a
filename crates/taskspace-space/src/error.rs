//! Error types for space construction and enumeration.

use std::fmt;
use taskspace_core::DimensionKind;

/// Errors arising from space construction or enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// An ordering entry names a field the space does not declare.
    UnknownOrderName {
        /// The unknown name.
        name: String,
    },
    /// An ordering entry lists a field under the wrong kind.
    OrderKindMismatch {
        /// The misplaced name.
        name: String,
        /// Kind of the ordering list it appeared in.
        listed: DimensionKind,
        /// Kind of the declared dimension.
        actual: DimensionKind,
    },
    /// A name appears twice in one ordering list.
    DuplicateOrderName {
        /// The repeated name.
        name: String,
    },
    /// An ordering list omits a field of its kind.
    IncompleteOrder {
        /// Kind of the incomplete list.
        kind: DimensionKind,
        /// A field of that kind missing from the list.
        missing: String,
    },
    /// Enumeration requested over a field that is not an integer range.
    NotEnumerable {
        /// The offending field.
        name: String,
        /// Its kind.
        kind: DimensionKind,
    },
    /// The number of combinations does not fit in `u64`.
    CardinalityOverflow,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOrderName { name } => {
                write!(f, "ordering names unknown field '{name}'")
            }
            Self::OrderKindMismatch {
                name,
                listed,
                actual,
            } => write!(f, "field '{name}' listed as {listed} but declared {actual}"),
            Self::DuplicateOrderName { name } => {
                write!(f, "field '{name}' appears twice in ordering")
            }
            Self::IncompleteOrder { kind, missing } => {
                write!(f, "{kind} ordering omits field '{missing}'")
            }
            Self::NotEnumerable { name, kind } => {
                write!(f, "non-enumerable space: field '{name}' is {kind}")
            }
            Self::CardinalityOverflow => write!(f, "space cardinality overflows u64"),
        }
    }
}

impl std::error::Error for SpaceError {}
