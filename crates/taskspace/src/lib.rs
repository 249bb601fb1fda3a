//! Taskspace: problem-space descriptions for reinforcement learning.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all taskspace sub-crates. For most users, adding `taskspace` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use taskspace::prelude::*;
//!
//! // An environment announces its problem shape.
//! let wire = "VERSION RL-Glue-3.0 PROBLEMTYPE episodic DISCOUNTFACTOR 0.9 \
//!             OBSERVATIONS INTS (0 3) DOUBLES (-1.000000 1.000000) ACTIONS INTS (0 1) \
//!             REWARDS (-1.0 1.0) EXTRA OBSERVATIONS INTS cell DOUBLES speed ACTIONS INTS push";
//! let ts = TaskSpec::parse(wire).unwrap();
//! assert_eq!(ts.to_string(), wire);
//!
//! // The agent discretizes observations for a table...
//! let tiles = TileMapping::new(
//!     ts.observations.clone(),
//!     &TileConfig::uniform(4).with_field("speed", 8),
//! )
//! .unwrap();
//! let cell = tiles.value(&item! { "cell" => 2, "speed" => 0.3 }).unwrap();
//! assert_eq!(cell, item! { "cell" => 2, "speed" => 5 });
//!
//! // ...and keys it by state-action tuple.
//! let keys = StateActionEncoder::new(tiles.image().clone(), ts.actions.clone());
//! let key = keys.encode((cell, item! { "push" => 1 })).unwrap();
//! assert_eq!(key.as_slice(), [Value::Int(2), Value::Int(5), Value::Int(1)]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `taskspace-core` | Dimensions, values, items, validation errors |
//! | [`space`] | `taskspace-space` | The `Space` container |
//! | [`spec`] | `taskspace-spec` | TaskSpec wire codec |
//! | [`map`] | `taskspace-map` | Identity, offset, tile and composed mappings |
//! | [`encode`] | `taskspace-encode` | Item and state-action tuple encoders |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Dimensions, values and items (`taskspace-core`).
///
/// Also exports the [`item!`](types::item) macro for building
/// [`types::Item`]s inline.
pub use taskspace_core as types;

/// The [`space::Space`] container (`taskspace-space`).
pub use taskspace_space as space;

/// TaskSpec wire codec (`taskspace-spec`).
///
/// [`spec::TaskSpec`] parses with [`spec::TaskSpec::parse`] and prints
/// with `Display`.
pub use taskspace_spec as spec;

/// Mappings between spaces (`taskspace-map`).
pub use taskspace_map as map;

/// Tuple encoders (`taskspace-encode`).
pub use taskspace_encode as encode;

/// Common imports for typical taskspace usage.
///
/// ```rust
/// use taskspace::prelude::*;
/// ```
///
/// This imports the model types, the wire codec, every mapping and both
/// encoders.
pub mod prelude {
    // Model
    pub use taskspace_core::{item, Dimension, DimensionKind, Item, Number, Value};

    // Errors
    pub use taskspace_core::ValidationError;
    pub use taskspace_encode::EncodeError;
    pub use taskspace_map::{ConfigError, MappingError};
    pub use taskspace_space::SpaceError;
    pub use taskspace_spec::FormatError;

    // Space
    pub use taskspace_space::{Order, Space};

    // Wire codec
    pub use taskspace_spec::{RewardRange, TaskSpec};

    // Mappings
    pub use taskspace_map::{
        ComposedMapping, IdentityMapping, Mapping, OffsetMapping, TileConfig, TileMapping,
    };

    // Encoders
    pub use taskspace_encode::{Encoded, SpaceEncoder, StateAction, StateActionEncoder};
}
