//! Binds anonymous wire ranges to the field names carried in `EXTRA`.
//!
//! The range sections of a TaskSpec list bounds only. Names arrive
//! separately, inside the free-form `EXTRA` text, as
//!
//! ```text
//! OBSERVATIONS INTS n... DOUBLES n... CHARS n... ACTIONS INTS n... ...
//! ```
//!
//! and are zipped positionally, kind by kind, onto the ranges in the order
//! they were parsed. This coupling between two grammars is fragile, so it
//! lives here and nowhere else.
//!
//! Rules:
//!
//! - The observation naming section starts at the first `OBSERVATIONS`
//!   token in `EXTRA`; the action section at the first `ACTIONS` token
//!   after it.
//! - A kind list takes at most as many names as there are ranges of that
//!   kind, stopping early at any section keyword. Whatever follows is
//!   ordinary free text.
//! - Fewer names than ranges is a [`FormatError::NameCountMismatch`].
//! - A section absent from `EXTRA` leaves its space empty and discards the
//!   parsed ranges (logged at `warn` level). No synthetic names are
//!   generated.
//!
//! `EXTRA` itself is never modified by binding.

use crate::error::FormatError;
use indexmap::IndexMap;
use taskspace_core::{Dimension, DimensionKind};
use taskspace_space::{Order, Space};

const OBSERVATIONS: &str = "OBSERVATIONS";
const ACTIONS: &str = "ACTIONS";

type Names = IndexMap<DimensionKind, Vec<String>>;

/// Build the observation and action spaces from parsed ranges and the
/// naming section of `extra`.
pub fn bind(
    observations: &[Dimension],
    actions: &[Dimension],
    extra: &str,
) -> Result<(Space, Space), FormatError> {
    let tokens: Vec<&str> = extra.split_whitespace().collect();

    let (obs_names, resume) = match find(&tokens, 0, OBSERVATIONS) {
        Some(at) => {
            let (names, end) = read_section(&tokens, at + 1, observations);
            (Some(names), end)
        }
        None => (None, 0),
    };
    let act_names =
        find(&tokens, resume, ACTIONS).map(|at| read_section(&tokens, at + 1, actions).0);

    Ok((
        build(OBSERVATIONS, observations, obs_names)?,
        build(ACTIONS, actions, act_names)?,
    ))
}

fn find(tokens: &[&str], from: usize, keyword: &str) -> Option<usize> {
    tokens
        .iter()
        .skip(from)
        .position(|t| *t == keyword)
        .map(|i| i + from)
}

fn kind_for(keyword: &str) -> Option<DimensionKind> {
    DimensionKind::ALL
        .into_iter()
        .find(|kind| kind.keyword() == keyword)
}

fn is_keyword(token: &str) -> bool {
    token == OBSERVATIONS || token == ACTIONS || kind_for(token).is_some()
}

fn count_of(ranges: &[Dimension], kind: DimensionKind) -> usize {
    ranges.iter().filter(|d| d.kind() == kind).count()
}

/// Read `INTS/DOUBLES/CHARS` lists starting at `start`. Returns the names
/// and the index of the first unconsumed token.
fn read_section(tokens: &[&str], start: usize, ranges: &[Dimension]) -> (Names, usize) {
    let mut names = Names::new();
    let mut i = start;
    while let Some(kind) = tokens.get(i).and_then(|t| kind_for(t)) {
        i += 1;
        let limit = count_of(ranges, kind);
        let list = names.entry(kind).or_default();
        while list.len() < limit {
            match tokens.get(i) {
                Some(t) if !is_keyword(t) => {
                    list.push((*t).to_string());
                    i += 1;
                }
                _ => break,
            }
        }
    }
    (names, i)
}

fn build(
    section: &'static str,
    ranges: &[Dimension],
    names: Option<Names>,
) -> Result<Space, FormatError> {
    let Some(names) = names else {
        if !ranges.is_empty() {
            tracing::warn!(
                section,
                ranges = ranges.len(),
                "no naming section in EXTRA; leaving space empty"
            );
        }
        return Ok(Space::empty());
    };

    let mut spec = Vec::with_capacity(ranges.len());
    let mut order = Order::new();
    for kind in DimensionKind::ALL {
        let dims: Vec<Dimension> = ranges.iter().copied().filter(|d| d.kind() == kind).collect();
        let listed = names.get(&kind).map(Vec::as_slice).unwrap_or(&[]);
        if dims.len() != listed.len() {
            return Err(FormatError::NameCountMismatch {
                section,
                kind,
                ranges: dims.len(),
                names: listed.len(),
            });
        }
        spec.extend(listed.iter().cloned().zip(dims));
        if !listed.is_empty() {
            order.insert(kind, listed.to_vec());
        }
    }
    Ok(Space::with_order(spec, order)?)
}
