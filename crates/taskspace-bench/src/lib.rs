//! Benchmark profiles for the taskspace workspace.
//!
//! - [`wide_space`]: a space with many fields of every kind
//! - [`wide_task_spec`]: a task spec over two wide spaces
//! - [`grid_profile`]: a square integer grid for enumeration

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use taskspace_core::Dimension;
use taskspace_space::Space;
use taskspace_spec::TaskSpec;

/// `per_kind` integer, double and char fields, named `<prefix><kind><i>`.
pub fn wide_space(prefix: &str, per_kind: usize) -> Space {
    let mut spec = Vec::with_capacity(per_kind * 3);
    for i in 0..per_kind {
        let w = i as i64 + 1;
        spec.push((format!("{prefix}i{i}"), Dimension::integer(-w, w)));
        spec.push((
            format!("{prefix}d{i}"),
            Dimension::double(-(w as f64) / 4.0, w as f64 / 4.0),
        ));
        spec.push((format!("{prefix}c{i}"), Dimension::Char));
    }
    Space::new(spec)
}

/// A spec whose observations and actions are [`wide_space`]s.
pub fn wide_task_spec(per_kind: usize) -> TaskSpec {
    TaskSpec::builder()
        .discount_factor(0.99)
        .observations(wide_space("o", per_kind))
        .actions(wide_space("a", per_kind / 4 + 1))
        .rewards(-1.0, 1.0)
        .build()
}

/// An `n` × `n` integer grid with fields `x` and `y`.
pub fn grid_profile(n: i64) -> Space {
    Space::new([
        ("x", Dimension::integer(0, n - 1)),
        ("y", Dimension::integer(0, n - 1)),
    ])
}
