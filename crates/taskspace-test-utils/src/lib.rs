//! Test fixtures and proptest strategies for taskspace development.
//!
//! [`fixtures`] holds canonical problem descriptions (mountain car, a small
//! grid world). [`strategies`] generates arbitrary spaces and task specs
//! whose wire form round-trips exactly.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{continuous_state, grid_actions, grid_world, mountain_car, MOUNTAIN_CAR};
pub use strategies::{arb_dimension, arb_space, arb_task_spec};
