//! State / state-action pair encoding.

use taskspace_core::{Item, Value};
use taskspace_space::Space;

use crate::encoder::{Encoded, SpaceEncoder};
use crate::error::EncodeError;

/// A state, optionally paired with an action.
#[derive(Clone, Debug, PartialEq)]
pub struct StateAction {
    /// The state item.
    pub state: Item,
    /// The action item, if any.
    pub action: Option<Item>,
}

impl StateAction {
    /// A bare state.
    pub fn state(state: Item) -> Self {
        Self {
            state,
            action: None,
        }
    }

    /// A state-action pair.
    pub fn pair(state: Item, action: Item) -> Self {
        Self {
            state,
            action: Some(action),
        }
    }
}

impl From<Item> for StateAction {
    fn from(state: Item) -> Self {
        Self::state(state)
    }
}

impl From<(Item,)> for StateAction {
    fn from((state,): (Item,)) -> Self {
        Self::state(state)
    }
}

impl From<(Item, Item)> for StateAction {
    fn from((state, action): (Item, Item)) -> Self {
        Self::pair(state, action)
    }
}

/// Accepts one item (state) or two (state, action).
impl TryFrom<&[Item]> for StateAction {
    type Error = EncodeError;

    fn try_from(items: &[Item]) -> Result<Self, Self::Error> {
        match items {
            [state] => Ok(Self::state(state.clone())),
            [state, action] => Ok(Self::pair(state.clone(), action.clone())),
            _ => Err(EncodeError::IllegalArity { arity: items.len() }),
        }
    }
}

/// Encodes a [`StateAction`] as the state tuple followed by the action
/// tuple, when present.
///
/// ```
/// use taskspace_core::{item, Dimension, Value};
/// use taskspace_encode::StateActionEncoder;
/// use taskspace_space::Space;
///
/// let enc = StateActionEncoder::new(
///     Space::new([("state", Dimension::integer(0, 9))]),
///     Space::new([("choice", Dimension::integer(0, 3))]),
/// );
/// let pair = (item! { "state" => 0 }, item! { "choice" => 3 });
/// assert_eq!(enc.encode(pair).unwrap().as_slice(), [Value::Int(0), Value::Int(3)]);
/// assert_eq!(enc.encode(item! { "state" => 0 }).unwrap().as_slice(), [Value::Int(0)]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateActionEncoder {
    state: SpaceEncoder,
    action: SpaceEncoder,
}

impl StateActionEncoder {
    /// Encoder over the given state and action spaces.
    pub fn new(state: Space, action: Space) -> Self {
        Self {
            state: SpaceEncoder::new(state),
            action: SpaceEncoder::new(action),
        }
    }

    /// The state encoder.
    pub fn state(&self) -> &SpaceEncoder {
        &self.state
    }

    /// The action encoder.
    pub fn action(&self) -> &SpaceEncoder {
        &self.action
    }

    /// Length of a full state-action tuple.
    pub fn width(&self) -> usize {
        self.state.width() + self.action.width()
    }

    /// Encode a bare state or a state-action pair.
    pub fn encode(&self, input: impl Into<StateAction>) -> Result<Encoded, EncodeError> {
        let input = input.into();
        let mut out = Encoded::with_capacity(self.width());
        self.state.encode_into(&input.state, &mut out)?;
        if let Some(action) = &input.action {
            self.action.encode_into(action, &mut out)?;
        }
        Ok(out)
    }

    /// Encode a slice of one or two items.
    pub fn encode_items(&self, items: &[Item]) -> Result<Encoded, EncodeError> {
        self.encode(StateAction::try_from(items)?)
    }

    /// Decode a tuple of state width (bare state) or full width (pair).
    ///
    /// With an empty action space both widths coincide and the result is
    /// a bare state.
    pub fn decode(&self, values: &[Value]) -> Result<StateAction, EncodeError> {
        let split = self.state.width();
        if values.len() == split {
            return Ok(StateAction::state(self.state.decode(values)?));
        }
        if values.len() == self.width() {
            let (state, action) = values.split_at(split);
            return Ok(StateAction::pair(
                self.state.decode(state)?,
                self.action.decode(action)?,
            ));
        }
        Err(EncodeError::LengthMismatch {
            expected: self.width(),
            found: values.len(),
        })
    }
}
