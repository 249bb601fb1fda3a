//! Mappings between spaces.
//!
//! A [`Mapping`] pairs a *domain* [`Space`](taskspace_space::Space) with an
//! *image* space and transforms items between them. The unchecked
//! [`forward`](Mapping::forward) / [`backward`](Mapping::backward) pair
//! assumes its input is well formed; the checked
//! [`value`](Mapping::value) / [`inverse`](Mapping::inverse) pair verifies
//! membership on both sides and surfaces the first
//! [`ValidationError`](taskspace_core::ValidationError).
//!
//! Implementations:
//!
//! - [`IdentityMapping`]: image equals domain.
//! - [`OffsetMapping`]: shifts integer ranges to start at zero.
//! - [`TileMapping`]: equal-width bucket discretization of numeric fields,
//!   configured by a [`TileConfig`].
//! - [`ComposedMapping`]: two mappings chained through a shared space.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod identity;
pub mod mapping;
pub mod offset;
pub mod tile;

pub use config::{ConfigError, TileConfig};
pub use error::MappingError;
pub use identity::IdentityMapping;
pub use mapping::{ComposedMapping, Mapping};
pub use offset::OffsetMapping;
pub use tile::TileMapping;
