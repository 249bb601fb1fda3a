//! Spaces: named collections of dimensions.
//!
//! A [`Space`] aggregates named [`Dimension`](taskspace_core::Dimension)s,
//! resolves a per-kind name ordering once at construction, and optionally
//! carries a validity predicate over fully assigned items. Spaces are the
//! common currency of the wire codec, the mapping framework and the
//! encoders.
//!
//! # Ordering
//!
//! Names are listed kind by kind (integers, then doubles, then chars).
//! Within a kind the order is either supplied explicitly or, when absent,
//! lexicographic. Either way the result is stored in a concrete table so
//! later lookups never branch on where it came from.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod space;

pub use error::SpaceError;
pub use space::{Order, Predicate, Space};
