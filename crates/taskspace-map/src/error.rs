//! Error type for mapping construction and checked transforms.

use std::error::Error;
use std::fmt;

use taskspace_core::{DimensionKind, ValidationError};
use taskspace_space::SpaceError;

use crate::config::ConfigError;

/// Errors from building or applying a [`Mapping`](crate::Mapping).
#[derive(Clone, Debug, PartialEq)]
pub enum MappingError {
    /// An item is not a member of the domain or image.
    Validation(ValidationError),
    /// The mapping cannot handle a dimension of this kind.
    UnsupportedDimension {
        /// Mapping that rejected the dimension.
        mapping: &'static str,
        /// Offending field.
        field: String,
        /// Its kind.
        kind: DimensionKind,
    },
    /// `max - min` of an integer field does not fit in an `i64`.
    RangeOverflow {
        /// Offending field.
        field: String,
    },
    /// Tile bucket configuration is invalid for the domain.
    Config(ConfigError),
    /// The derived image space could not be built.
    Space(SpaceError),
    /// The first mapping's image differs from the second's domain.
    IncompatibleSpaces,
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "validation failed: {e}"),
            Self::UnsupportedDimension {
                mapping,
                field,
                kind,
            } => write!(f, "{mapping} cannot map {kind} field '{field}'"),
            Self::Config(e) => write!(f, "invalid tile configuration: {e}"),
            Self::Space(e) => write!(f, "cannot build image space: {e}"),
            Self::RangeOverflow { field } => {
                write!(f, "range of field '{field}' is wider than i64")
            }
            Self::IncompatibleSpaces => {
                write!(f, "image of the first mapping is not the domain of the second")
            }
        }
    }
}

impl Error for MappingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Space(e) => Some(e),
            Self::UnsupportedDimension { .. }
            | Self::RangeOverflow { .. }
            | Self::IncompatibleSpaces => None,
        }
    }
}

impl From<ValidationError> for MappingError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ConfigError> for MappingError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SpaceError> for MappingError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}
