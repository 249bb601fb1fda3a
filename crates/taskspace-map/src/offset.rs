//! Zero-offset mapping for integer spaces.

use indexmap::IndexMap;
use taskspace_core::{Dimension, DimensionKind, Item, Value};
use taskspace_space::{Order, Space};

use crate::error::MappingError;
use crate::mapping::Mapping;

/// Shifts every `Integer(min, max)` field to `Integer(0, max - min)`.
///
/// Forward subtracts `min`, backward adds it back. Fields whose width
/// `max - min` overflows an `i64` are rejected at construction. The image keeps the
/// domain's name order.
///
/// ```
/// use taskspace_core::{item, Dimension};
/// use taskspace_map::{Mapping, OffsetMapping};
/// use taskspace_space::Space;
///
/// let m = OffsetMapping::new(Space::new([("floor", Dimension::integer(2, 3))])).unwrap();
/// assert_eq!(m.value(&item! { "floor" => 3 }).unwrap(), item! { "floor" => 1 });
/// assert_eq!(m.inverse(&item! { "floor" => 0 }).unwrap(), item! { "floor" => 2 });
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OffsetMapping {
    domain: Space,
    image: Space,
    offsets: IndexMap<String, i64>,
}

impl OffsetMapping {
    /// Build the mapping. Every dimension of `domain` must be an integer.
    pub fn new(domain: Space) -> Result<Self, MappingError> {
        let mut offsets = IndexMap::with_capacity(domain.len());
        let mut image = Vec::with_capacity(domain.len());
        for (name, dim) in domain.dimensions() {
            let Dimension::Integer { min, max } = *dim else {
                return Err(MappingError::UnsupportedDimension {
                    mapping: "OffsetMapping",
                    field: name.to_string(),
                    kind: dim.kind(),
                });
            };
            let Some(width) = max.checked_sub(min) else {
                return Err(MappingError::RangeOverflow {
                    field: name.to_string(),
                });
            };
            offsets.insert(name.to_string(), min);
            image.push((name.to_string(), Dimension::integer(0, width)));
        }
        let order = Order::from([(DimensionKind::Integer, domain.names().to_vec())]);
        let image = Space::with_order(image, order)?;
        tracing::debug!(fields = offsets.len(), "built offset mapping");
        Ok(Self {
            domain,
            image,
            offsets,
        })
    }

    /// The `min` subtracted from each field.
    pub fn offsets(&self) -> &IndexMap<String, i64> {
        &self.offsets
    }

    fn shift(&self, item: &Item, sign: i64) -> Item {
        item.iter()
            .map(|(name, value)| {
                let shifted = match (self.offsets.get(name), value) {
                    // Exact for members: every width fits in an i64.
                    (Some(&min), Value::Int(v)) => Value::Int(if sign < 0 {
                        v.wrapping_sub(min)
                    } else {
                        v.wrapping_add(min)
                    }),
                    _ => *value,
                };
                (name.clone(), shifted)
            })
            .collect()
    }
}

impl Mapping for OffsetMapping {
    fn domain(&self) -> &Space {
        &self.domain
    }

    fn image(&self) -> &Space {
        &self.image
    }

    fn forward(&self, item: &Item) -> Item {
        self.shift(item, -1)
    }

    fn backward(&self, item: &Item) -> Item {
        self.shift(item, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use taskspace_core::item;

    #[test]
    fn two_to_three_maps_onto_zero_to_one() {
        let m = OffsetMapping::new(Space::new([("a", Dimension::integer(2, 3))])).unwrap();
        assert_eq!(m.image().field("a"), Some(&Dimension::integer(0, 1)));
        assert_eq!(m.value(&item! { "a" => 2 }).unwrap(), item! { "a" => 0 });
        assert_eq!(m.value(&item! { "a" => 3 }).unwrap(), item! { "a" => 1 });
        for v in [2, 3] {
            let it = item! { "a" => v };
            assert_eq!(m.inverse(&m.value(&it).unwrap()).unwrap(), it);
        }
    }

    #[test]
    fn image_keeps_domain_order() {
        let order = Order::from([(DimensionKind::Integer, vec!["z".to_string(), "a".to_string()])]);
        let domain = Space::with_order(
            [("a", Dimension::integer(1, 2)), ("z", Dimension::integer(-5, 5))],
            order,
        )
        .unwrap();
        let m = OffsetMapping::new(domain).unwrap();
        assert_eq!(m.image().names(), ["z", "a"]);
        assert_eq!(m.image().field("z"), Some(&Dimension::integer(0, 10)));
        assert_eq!(m.offsets()["z"], -5);
    }

    #[test]
    fn non_integer_dimension_is_unsupported() {
        let err = OffsetMapping::new(Space::new([
            ("a", Dimension::integer(0, 1)),
            ("v", Dimension::double(0.0, 1.0)),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            MappingError::UnsupportedDimension {
                mapping: "OffsetMapping",
                field: "v".into(),
                kind: DimensionKind::Double,
            }
        );
    }

    #[test]
    fn full_i64_range_is_rejected() {
        let err = OffsetMapping::new(Space::new([
            ("ok", Dimension::integer(0, 1)),
            ("wide", Dimension::integer(i64::MIN, i64::MAX)),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            MappingError::RangeOverflow {
                field: "wide".into()
            }
        );
    }

    #[test]
    fn widest_representable_range_maps_exactly() {
        let m = OffsetMapping::new(Space::new([("w", Dimension::integer(i64::MIN + 1, 0))]))
            .unwrap();
        assert_eq!(m.image().field("w"), Some(&Dimension::integer(0, i64::MAX)));
        for (v, shifted) in [(i64::MIN + 1, 0), (-5, i64::MAX - 5), (0, i64::MAX)] {
            let it = item! { "w" => v };
            let out = m.value(&it).unwrap();
            assert_eq!(out, item! { "w" => shifted });
            assert_eq!(m.inverse(&out).unwrap(), it);
        }

        let m = OffsetMapping::new(Space::new([("w", Dimension::integer(-1, i64::MAX - 1))]))
            .unwrap();
        assert_eq!(m.value(&item! { "w" => 0 }).unwrap(), item! { "w" => 1 });
        assert_eq!(m.value(&item! { "w" => 5 }).unwrap(), item! { "w" => 6 });
        assert_eq!(m.inverse(&item! { "w" => 0 }).unwrap(), item! { "w" => -1 });
    }

    #[test]
    fn image_items_outside_range_are_rejected_on_inverse() {
        let m = OffsetMapping::new(Space::new([("a", Dimension::integer(2, 3))])).unwrap();
        assert!(m.inverse(&item! { "a" => 2 }).is_err());
    }

    proptest! {
        #[test]
        fn round_trip_over_whole_range(min in -100i64..100, width in 0i64..50, pick in 0i64..50) {
            let m = OffsetMapping::new(Space::new([("x", Dimension::integer(min, min + width))])).unwrap();
            let it = item! { "x" => min + pick % (width + 1) };
            let out = m.value(&it).unwrap();
            prop_assert_eq!(m.inverse(&out).unwrap(), it);
        }
    }
}
