//! Item ↔ tuple encoding for a single space.

use smallvec::SmallVec;
use taskspace_core::{Item, Value};
use taskspace_space::Space;

use crate::error::EncodeError;

/// A flat tuple of values.
///
/// Uses `SmallVec<[Value; 8]>` so typical observation and action tuples
/// stay on the stack.
pub type Encoded = SmallVec<[Value; 8]>;

/// Encodes items of one space as tuples in [`Space::names`] order.
///
/// Values are copied through unchanged; membership is not checked.
///
/// ```
/// use taskspace_core::{item, Dimension, Value};
/// use taskspace_encode::SpaceEncoder;
/// use taskspace_space::Space;
///
/// let enc = SpaceEncoder::new(Space::new([
///     ("y", Dimension::integer(0, 3)),
///     ("x", Dimension::integer(0, 3)),
/// ]));
/// let tuple = enc.encode(&item! { "y" => 2, "x" => 1 }).unwrap();
/// assert_eq!(tuple.as_slice(), [Value::Int(1), Value::Int(2)]);
/// assert_eq!(enc.decode(&tuple).unwrap(), item! { "x" => 1, "y" => 2 });
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SpaceEncoder {
    space: Space,
}

impl SpaceEncoder {
    /// Encoder for `space`.
    pub fn new(space: Space) -> Self {
        Self { space }
    }

    /// The space whose layout this encoder follows.
    pub fn space(&self) -> &Space {
        &self.space
    }

    /// Tuple length.
    pub fn width(&self) -> usize {
        self.space.len()
    }

    /// Encode `item`. Fields outside the space are ignored.
    pub fn encode(&self, item: &Item) -> Result<Encoded, EncodeError> {
        let mut out = Encoded::with_capacity(self.width());
        self.encode_into(item, &mut out)?;
        Ok(out)
    }

    /// Append the encoding of `item` to `out`.
    pub fn encode_into(&self, item: &Item, out: &mut Encoded) -> Result<(), EncodeError> {
        for name in self.space.names() {
            let value = item.get(name).ok_or_else(|| EncodeError::MissingField {
                field: name.clone(),
            })?;
            out.push(*value);
        }
        Ok(())
    }

    /// Rebuild an item from a tuple of exactly [`width`](Self::width)
    /// values.
    pub fn decode(&self, values: &[Value]) -> Result<Item, EncodeError> {
        if values.len() != self.width() {
            return Err(EncodeError::LengthMismatch {
                expected: self.width(),
                found: values.len(),
            });
        }
        Ok(self
            .space
            .names()
            .iter()
            .cloned()
            .zip(values.iter().copied())
            .collect())
    }
}
