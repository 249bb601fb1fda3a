//! TaskSpec: the textual problem description exchanged between an agent
//! and an environment.
//!
//! A [`TaskSpec`] records the protocol version, problem type, discount
//! factor, the observation and action [`Space`](taskspace_space::Space)s,
//! the reward range and a free-form `EXTRA` section. The wire form is a
//! single line of whitespace-separated tokens:
//!
//! ```text
//! VERSION <version> PROBLEMTYPE <type> DISCOUNTFACTOR <number>
//! OBSERVATIONS <ranges> ACTIONS <ranges> REWARDS (<min> <max>) EXTRA <text>
//! ```
//!
//! where `<ranges>` is `INTS (a b)... DOUBLES (a b)... CHARCOUNT n` with
//! every section optional. Ranges on the wire are anonymous; field names
//! travel inside `EXTRA` as
//! `OBSERVATIONS INTS n... DOUBLES n... CHARS n... ACTIONS ...` and are
//! zipped back onto the ranges by the [`binder`].
//!
//! # Round trip
//!
//! For every canonical string `s` whose `EXTRA` carries the naming section,
//! `TaskSpec::parse(s)?.to_string() == s`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod binder;
pub mod codec;
pub mod error;
pub(crate) mod lexer;
pub mod taskspec;

pub use error::FormatError;
pub use taskspec::{
    RewardRange, TaskSpec, TaskSpecBuilder, DEFAULT_PROBLEM_TYPE, DEFAULT_VERSION,
};
