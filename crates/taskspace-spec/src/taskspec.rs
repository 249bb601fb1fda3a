//! The [`TaskSpec`] value object and its builder.

use std::fmt;
use std::str::FromStr;

use taskspace_core::{Dimension, Number};
use taskspace_space::Space;

use crate::codec;
use crate::error::FormatError;

/// Protocol version written by [`TaskSpecBuilder`] unless overridden.
pub const DEFAULT_VERSION: &str = "RL-Glue-3.0";

/// Problem type written by [`TaskSpecBuilder`] unless overridden.
pub const DEFAULT_PROBLEM_TYPE: &str = "episodic";

/// Structured form of the problem description negotiated between an agent
/// and an environment.
///
/// Immutable by convention: all fields are public for inspection and
/// pattern matching, but nothing in this workspace mutates a parsed spec.
/// Equality is structural across every field.
///
/// # Examples
///
/// ```
/// use taskspace_core::Dimension;
/// use taskspace_space::Space;
/// use taskspace_spec::TaskSpec;
///
/// let ts = TaskSpec::builder()
///     .observations(Space::new([("pos", Dimension::integer(0, 9))]))
///     .actions(Space::new([("move", Dimension::integer(0, 1))]))
///     .rewards(-1.0, 0.0)
///     .build();
///
/// let wire = ts.to_string();
/// assert_eq!(
///     wire,
///     "VERSION RL-Glue-3.0 PROBLEMTYPE episodic DISCOUNTFACTOR 1 \
///      OBSERVATIONS INTS (0 9) ACTIONS INTS (0 1) REWARDS (-1.0 0.0) \
///      EXTRA OBSERVATIONS INTS pos ACTIONS INTS move"
/// );
/// assert_eq!(TaskSpec::parse(&wire).unwrap(), ts);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TaskSpec {
    /// Protocol version string, e.g. `RL-Glue-3.0`.
    pub version: String,
    /// Problem type, e.g. `episodic` or `continuing`.
    pub problem_type: String,
    /// Discount factor, kept in its written form.
    pub discount_factor: Number,
    /// Observation space.
    pub observations: Space,
    /// Action space.
    pub actions: Space,
    /// Reward range.
    pub rewards: RewardRange,
    /// Free-form trailing text, verbatim.
    pub extra: String,
}

/// Inclusive real range of the per-step reward.
///
/// Prints as `(<min> <max>)` in shortest round-trip form, e.g.
/// `(-5.0 5.0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardRange {
    /// Lowest reward.
    pub min: f64,
    /// Highest reward.
    pub max: f64,
}

impl RewardRange {
    /// Range `[min, max]`.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The range as a [`Dimension::Double`].
    pub fn as_dimension(&self) -> Dimension {
        Dimension::double(self.min, self.max)
    }
}

impl fmt::Display for RewardRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} {:?})", self.min, self.max)
    }
}

impl TaskSpec {
    /// Start building a spec with protocol defaults.
    pub fn builder() -> TaskSpecBuilder {
        TaskSpecBuilder::default()
    }

    /// Parse the wire form.
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        codec::decode(input)
    }

    /// The `EXTRA` naming section that lets `observations` and `actions`
    /// survive a round trip through the wire form.
    pub fn naming_extra(observations: &Space, actions: &Space) -> String {
        let mut out = String::new();
        for (keyword, space) in [("OBSERVATIONS", observations), ("ACTIONS", actions)] {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(keyword);
            let names = space.names_description();
            if !names.is_empty() {
                out.push(' ');
                out.push_str(&names);
            }
        }
        out
    }
}

impl fmt::Display for TaskSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::encode(self, f)
    }
}

impl FromStr for TaskSpec {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Builder for [`TaskSpec`].
///
/// Defaults: version [`DEFAULT_VERSION`], problem type
/// [`DEFAULT_PROBLEM_TYPE`], discount factor `1`, empty spaces, reward
/// range `(0.0 0.0)`. When no `extra` is supplied, the naming section from
/// [`TaskSpec::naming_extra`] is used so the result round-trips.
#[derive(Clone, Debug)]
pub struct TaskSpecBuilder {
    version: String,
    problem_type: String,
    discount_factor: Number,
    observations: Space,
    actions: Space,
    rewards: RewardRange,
    extra: Option<String>,
}

impl Default for TaskSpecBuilder {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            problem_type: DEFAULT_PROBLEM_TYPE.to_string(),
            discount_factor: Number::Int(1),
            observations: Space::empty(),
            actions: Space::empty(),
            rewards: RewardRange::new(0.0, 0.0),
            extra: None,
        }
    }
}

impl TaskSpecBuilder {
    /// Set the protocol version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the problem type.
    pub fn problem_type(mut self, problem_type: impl Into<String>) -> Self {
        self.problem_type = problem_type.into();
        self
    }

    /// Set the discount factor.
    pub fn discount_factor(mut self, discount_factor: impl Into<Number>) -> Self {
        self.discount_factor = discount_factor.into();
        self
    }

    /// Set the observation space.
    pub fn observations(mut self, space: Space) -> Self {
        self.observations = space;
        self
    }

    /// Set the action space.
    pub fn actions(mut self, space: Space) -> Self {
        self.actions = space;
        self
    }

    /// Set the reward range.
    pub fn rewards(mut self, min: f64, max: f64) -> Self {
        self.rewards = RewardRange::new(min, max);
        self
    }

    /// Set `EXTRA` verbatim, replacing the generated naming section.
    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    /// Finish the spec.
    pub fn build(self) -> TaskSpec {
        let extra = self
            .extra
            .unwrap_or_else(|| TaskSpec::naming_extra(&self.observations, &self.actions));
        TaskSpec {
            version: self.version,
            problem_type: self.problem_type,
            discount_factor: self.discount_factor,
            observations: self.observations,
            actions: self.actions,
            rewards: self.rewards,
            extra,
        }
    }
}
