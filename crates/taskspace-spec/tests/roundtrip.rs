//! Wire round-trip and binding behaviour through the public API.

use proptest::prelude::*;
use taskspace_core::{Dimension, DimensionKind, Number};
use taskspace_spec::{FormatError, TaskSpec};
use taskspace_test_utils::{arb_task_spec, grid_actions, grid_world, mountain_car, MOUNTAIN_CAR};

// ── Canonical strings ───────────────────────────────────────────

#[test]
fn mountain_car_prints_back_unchanged() {
    assert_eq!(mountain_car().to_string(), MOUNTAIN_CAR);
}

#[test]
fn mountain_car_fields() {
    let ts = mountain_car();
    assert_eq!(ts.observations.names_of(DimensionKind::Integer), ["oi1", "oi2", "oi3"]);
    assert_eq!(ts.observations.names_of(DimensionKind::Char), ["oc1", "oc2"]);
    assert_eq!(ts.actions.names(), ["ai1"]);
    assert_eq!(ts.discount_factor, Number::Int(1));
}

#[test]
fn builder_output_parses_to_the_same_spec() {
    let ts = TaskSpec::builder()
        .observations(grid_world(4, 3))
        .actions(grid_actions())
        .discount_factor(0.9)
        .rewards(-1.0, 10.0)
        .build();
    let back: TaskSpec = ts.to_string().parse().unwrap();
    assert_eq!(back, ts);
    assert_eq!(back.observations.items().unwrap().len(), 12);
}

// ── Binding ─────────────────────────────────────────────────────

#[test]
fn missing_action_naming_leaves_actions_empty() {
    let ts = TaskSpec::parse(
        "VERSION RL-Glue-3.0 PROBLEMTYPE episodic DISCOUNTFACTOR 1 \
         OBSERVATIONS INTS (0 3) ACTIONS INTS (0 4) REWARDS (-1.0 0.0) \
         EXTRA OBSERVATIONS INTS pos",
    )
    .unwrap();
    assert_eq!(ts.observations.field("pos"), Some(&Dimension::integer(0, 3)));
    assert!(ts.actions.is_empty());
}

#[test]
fn non_lexicographic_names_keep_their_order() {
    let ts = TaskSpec::parse(
        "VERSION v PROBLEMTYPE episodic DISCOUNTFACTOR 1 \
         OBSERVATIONS INTS (0 1) (0 9) ACTIONS REWARDS (0.0 1.0) \
         EXTRA OBSERVATIONS INTS zeta alpha ACTIONS",
    )
    .unwrap();
    assert_eq!(ts.observations.names(), ["zeta", "alpha"]);
    assert_eq!(ts.observations.field("alpha"), Some(&Dimension::integer(0, 9)));
    assert!(ts.to_string().contains("INTS (0 1) (0 9)"));
}

#[test]
fn too_few_names_is_rejected() {
    let err = TaskSpec::parse(
        "VERSION v PROBLEMTYPE episodic DISCOUNTFACTOR 1 \
         OBSERVATIONS INTS (0 1) (0 9) ACTIONS REWARDS (0.0 1.0) \
         EXTRA OBSERVATIONS INTS only ACTIONS",
    )
    .unwrap_err();
    assert!(matches!(err, FormatError::NameCountMismatch { ranges: 2, names: 1, .. }));
}

// ── Properties ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn parse_inverts_display(ts in arb_task_spec()) {
        let wire = ts.to_string();
        let back = TaskSpec::parse(&wire).unwrap();
        prop_assert_eq!(&back, &ts);
        prop_assert_eq!(back.to_string(), wire);
    }
}
