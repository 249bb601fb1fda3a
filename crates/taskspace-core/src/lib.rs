//! Core types for the taskspace problem-description framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the scalar axes of a problem ([`Dimension`]), the values that populate
//! them ([`Value`], [`Item`]), the numeric literal type used by the wire
//! codec ([`Number`]) and the [`ValidationError`] raised whenever a value
//! falls outside a declared dimension.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dimension;
pub mod error;
pub mod value;

pub use dimension::{Dimension, DimensionKind};
pub use error::{Bound, ValidationError};
pub use value::{Item, Number, Value};
