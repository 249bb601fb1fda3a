//! Canonical problem descriptions.

use taskspace_core::Dimension;
use taskspace_space::Space;
use taskspace_spec::TaskSpec;

/// Mountain car with three binary flags, three continuous readings, two
/// character fields and a five-way action.
pub const MOUNTAIN_CAR: &str = "VERSION RL-Glue-3.0 PROBLEMTYPE episodic DISCOUNTFACTOR 1 \
    OBSERVATIONS INTS (0 1) (0 1) (0 1) DOUBLES (-1.200000 0.500000) (-1.200000 0.500000) \
    (-0.070000 0.070000) CHARCOUNT 2 ACTIONS INTS (0 4) REWARDS (-5.0 5.0) \
    EXTRA OBSERVATIONS INTS oi1 oi2 oi3 DOUBLES od1 od2 od3 CHARS oc1 oc2 ACTIONS INTS ai1";

/// [`MOUNTAIN_CAR`], parsed.
pub fn mountain_car() -> TaskSpec {
    TaskSpec::parse(MOUNTAIN_CAR).expect("MOUNTAIN_CAR fixture must parse")
}

/// `x` in `[0, width)`, `y` in `[0, height)`.
pub fn grid_world(width: i64, height: i64) -> Space {
    Space::new([
        ("x", Dimension::integer(0, width - 1)),
        ("y", Dimension::integer(0, height - 1)),
    ])
}

/// Four compass moves.
pub fn grid_actions() -> Space {
    Space::new([("move", Dimension::integer(0, 3))])
}

/// Position and velocity of the mountain car.
pub fn continuous_state() -> Space {
    Space::new([
        ("position", Dimension::double(-1.2, 0.5)),
        ("velocity", Dimension::double(-0.07, 0.07)),
    ])
}
