//! Proptest strategies.
//!
//! Generated values are chosen so that the wire form is lossless: real
//! bounds sit on a 0.001 grid (exact at six printed decimals), names never
//! collide with section keywords, and any trailing `EXTRA` text is
//! lowercase.

use proptest::collection::vec;
use proptest::prelude::*;
use taskspace_core::{Dimension, DimensionKind, Number};
use taskspace_space::{Order, Space};
use taskspace_spec::TaskSpec;

/// Any dimension with small, well-formed bounds.
pub fn arb_dimension() -> impl Strategy<Value = Dimension> {
    prop_oneof![
        (-50i64..50, 0i64..50).prop_map(|(lo, w)| Dimension::integer(lo, lo + w)),
        (-5_000i64..5_000, 0i64..5_000).prop_map(|(lo, w)| {
            Dimension::double(lo as f64 / 1000.0, (lo + w) as f64 / 1000.0)
        }),
        Just(Dimension::Char),
    ]
}

fn prefix(kind: DimensionKind) -> char {
    match kind {
        DimensionKind::Integer => 'i',
        DimensionKind::Double => 'd',
        DimensionKind::Char => 'c',
    }
}

/// A space of up to five dimensions. Each kind's names are rotated by a
/// random amount, so most spaces carry a non-lexicographic order.
pub fn arb_space() -> impl Strategy<Value = Space> {
    (vec(arb_dimension(), 0..6), any::<usize>()).prop_map(|(dims, rotate)| {
        let spec: Vec<(String, Dimension)> = dims
            .into_iter()
            .enumerate()
            .map(|(i, d)| (format!("{}{i}", prefix(d.kind())), d))
            .collect();
        let mut order = Order::new();
        for kind in DimensionKind::ALL {
            let mut names: Vec<String> = spec
                .iter()
                .filter(|(_, d)| d.kind() == kind)
                .map(|(n, _)| n.clone())
                .collect();
            if !names.is_empty() {
                let k = rotate % names.len();
                names.rotate_left(k);
            }
            order.insert(kind, names);
        }
        Space::with_order(spec, order).expect("rotation is a permutation of each kind")
    })
}

fn arb_number() -> impl Strategy<Value = Number> {
    prop_oneof![
        (0i64..=1).prop_map(Number::Int),
        (0.0f64..=1.0).prop_map(Number::Real),
    ]
}

/// A task spec whose `EXTRA` is the naming section plus optional free text.
pub fn arb_task_spec() -> impl Strategy<Value = TaskSpec> {
    (
        "[A-Za-z0-9.-]{1,12}",
        prop_oneof![Just("episodic".to_string()), Just("continuing".to_string())],
        arb_number(),
        arb_space(),
        arb_space(),
        (-100.0f64..100.0, 0.0f64..100.0),
        proptest::option::of("[a-z]{1,6}( [a-z]{1,6}){0,3}"),
    )
        .prop_map(
            |(version, problem_type, discount, observations, actions, (lo, w), note)| {
                let mut extra = TaskSpec::naming_extra(&observations, &actions);
                if let Some(note) = note {
                    extra.push(' ');
                    extra.push_str(&note);
                }
                TaskSpec::builder()
                    .version(version)
                    .problem_type(problem_type)
                    .discount_factor(discount)
                    .observations(observations)
                    .actions(actions)
                    .rewards(lo, lo + w)
                    .extra(extra)
                    .build()
            },
        )
}
