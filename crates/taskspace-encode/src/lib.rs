//! Encoders between named items and flat value tuples.
//!
//! Tabular storage keys on flat tuples rather than named maps. A
//! [`SpaceEncoder`] lays an item out in its space's
//! [`names`](taskspace_space::Space::names) order; a
//! [`StateActionEncoder`] concatenates a state tuple with an optional
//! action tuple.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod encoder;
pub mod error;
pub mod state_action;

pub use encoder::{Encoded, SpaceEncoder};
pub use error::EncodeError;
pub use state_action::{StateAction, StateActionEncoder};
