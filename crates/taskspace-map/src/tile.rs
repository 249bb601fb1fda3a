//! Tile coding: equal-width bucket discretization of numeric fields.

use indexmap::IndexMap;
use taskspace_core::{Dimension, DimensionKind, Item, Value};
use taskspace_space::{Order, Space};

use crate::config::TileConfig;
use crate::error::MappingError;
use crate::mapping::Mapping;

/// Splits each numeric field `[min, max]` into `b` equal-width buckets and
/// maps a value to the index of its bucket, `Integer(0, b - 1)`.
///
/// Forward computes `floor((v - min) / range * b)` clamped to `[0, b - 1]`;
/// a zero range always lands in bucket 0. Backward returns the centre of
/// the bucket, `min + k / b * range + range / b / 2`, clamped to
/// `[min, max]` and rounded to the nearest integer for integer fields.
///
/// The image lists every field as an integer, in the domain's
/// [`names`](Space::names) order.
///
/// ```
/// use taskspace_core::{item, Dimension};
/// use taskspace_map::{Mapping, TileConfig, TileMapping};
/// use taskspace_space::Space;
///
/// let domain = Space::new([("x", Dimension::double(2.0, 3.0))]);
/// let m = TileMapping::new(domain, &TileConfig::uniform(3)).unwrap();
/// assert_eq!(m.value(&item! { "x" => 2.0 }).unwrap(), item! { "x" => 0 });
/// assert_eq!(m.value(&item! { "x" => 3.0 }).unwrap(), item! { "x" => 2 });
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TileMapping {
    domain: Space,
    image: Space,
    buckets: IndexMap<String, u32>,
    ranges: IndexMap<String, f64>,
}

impl TileMapping {
    /// Build the mapping. `Char` fields are rejected; every numeric field
    /// needs a positive bucket count from `config`.
    pub fn new(domain: Space, config: &TileConfig) -> Result<Self, MappingError> {
        if let Some((name, dim)) = domain.dimensions().find(|(_, d)| !d.is_numeric()) {
            return Err(MappingError::UnsupportedDimension {
                mapping: "TileMapping",
                field: name.to_string(),
                kind: dim.kind(),
            });
        }
        let buckets = config.resolve(&domain)?;

        let mut ranges = IndexMap::with_capacity(buckets.len());
        let mut image = Vec::with_capacity(buckets.len());
        for (name, dim) in domain.dimensions() {
            let Some(&b) = buckets.get(name) else {
                continue;
            };
            ranges.insert(name.to_string(), dim.range().unwrap_or(0.0));
            image.push((name.to_string(), Dimension::integer(0, i64::from(b) - 1)));
        }
        let order = Order::from([(DimensionKind::Integer, domain.names().to_vec())]);
        let image = Space::with_order(image, order)?;

        tracing::debug!(fields = buckets.len(), "built tile mapping");
        Ok(Self {
            domain,
            image,
            buckets,
            ranges,
        })
    }

    /// Bucket count per field.
    pub fn buckets(&self) -> &IndexMap<String, u32> {
        &self.buckets
    }

    /// `max - min` per field.
    pub fn ranges(&self) -> &IndexMap<String, f64> {
        &self.ranges
    }

    /// Bucket index of `v` in field `name`, or `None` for an unknown field.
    pub fn bucket(&self, name: &str, v: f64) -> Option<i64> {
        let b = *self.buckets.get(name)?;
        let range = *self.ranges.get(name)?;
        let (min, _) = self.domain.field(name)?.bounds()?;
        if range == 0.0 {
            return Some(0);
        }
        let raw = ((v - min) / range * f64::from(b)).floor();
        let top = f64::from(b) - 1.0;
        let clamped = raw.clamp(0.0, top);
        if clamped != raw {
            tracing::trace!(field = name, value = v, bucket = raw, "clamped to edge bucket");
        }
        Some(clamped as i64)
    }

    /// Centre of bucket `k` in field `name`, or `None` for an unknown
    /// field.
    pub fn centre(&self, name: &str, k: i64) -> Option<Value> {
        let b = f64::from(*self.buckets.get(name)?);
        let range = *self.ranges.get(name)?;
        let dim = self.domain.field(name)?;
        let (min, max) = dim.bounds()?;
        let raw = min + k as f64 / b * range + range / b / 2.0;
        let clamped = raw.max(min).min(max);
        if clamped != raw {
            tracing::trace!(field = name, bucket = k, value = raw, "clamped to field bounds");
        }
        Some(match dim {
            Dimension::Integer { .. } => Value::Int(clamped.round() as i64),
            _ => Value::Double(clamped),
        })
    }
}

impl Mapping for TileMapping {
    fn domain(&self) -> &Space {
        &self.domain
    }

    fn image(&self) -> &Space {
        &self.image
    }

    fn forward(&self, item: &Item) -> Item {
        item.iter()
            .map(|(name, value)| {
                let mapped = value
                    .as_f64()
                    .and_then(|v| self.bucket(name, v))
                    .map_or(*value, Value::Int);
                (name.clone(), mapped)
            })
            .collect()
    }

    fn backward(&self, item: &Item) -> Item {
        item.iter()
            .map(|(name, value)| {
                let mapped = value
                    .as_i64()
                    .and_then(|k| self.centre(name, k))
                    .unwrap_or(*value);
                (name.clone(), mapped)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use proptest::prelude::*;
    use taskspace_core::item;

    fn unit(buckets: u32) -> TileMapping {
        TileMapping::new(
            Space::new([("x", Dimension::double(2.0, 3.0))]),
            &TileConfig::uniform(buckets),
        )
        .unwrap()
    }

    // ── Forward ─────────────────────────────────────────────────

    #[test]
    fn endpoints_land_in_first_and_last_bucket() {
        let m = unit(3);
        assert_eq!(m.image().field("x"), Some(&Dimension::integer(0, 2)));
        assert_eq!(m.value(&item! { "x" => 2.0 }).unwrap(), item! { "x" => 0 });
        assert_eq!(m.value(&item! { "x" => 2.5 }).unwrap(), item! { "x" => 1 });
        assert_eq!(m.value(&item! { "x" => 3.0 }).unwrap(), item! { "x" => 2 });
    }

    #[test]
    fn zero_range_maps_to_bucket_zero() {
        let m = TileMapping::new(
            Space::new([("x", Dimension::double(1.0, 1.0))]),
            &TileConfig::uniform(4),
        )
        .unwrap();
        assert_eq!(m.value(&item! { "x" => 1.0 }).unwrap(), item! { "x" => 0 });
        assert_eq!(m.inverse(&item! { "x" => 3 }).unwrap(), item! { "x" => 1.0 });
    }

    #[test]
    fn unchecked_forward_clamps_out_of_range_values() {
        let m = unit(3);
        assert_eq!(m.forward(&item! { "x" => -10.0 }), item! { "x" => 0 });
        assert_eq!(m.forward(&item! { "x" => 10.0 }), item! { "x" => 2 });
    }

    #[test]
    fn integer_domain_fields_accept_int_values() {
        let m = TileMapping::new(
            Space::new([("n", Dimension::integer(0, 9))]),
            &TileConfig::uniform(5),
        )
        .unwrap();
        assert_eq!(m.value(&item! { "n" => 0 }).unwrap(), item! { "n" => 0 });
        assert_eq!(m.value(&item! { "n" => 9 }).unwrap(), item! { "n" => 4 });
    }

    // ── Inverse ─────────────────────────────────────────────────

    #[test]
    fn inverse_returns_bucket_centre() {
        let m = unit(3);
        let Value::Double(v) = m.inverse(&item! { "x" => 0 }).unwrap()["x"] else {
            panic!("double field must invert to a double");
        };
        assert!(v > 2.0 && v < 2.0 + 1.0 / 3.0, "centre {v} outside first bucket");
    }

    #[test]
    fn integer_fields_invert_to_nearest_integer() {
        let m = TileMapping::new(
            Space::new([("n", Dimension::integer(0, 9))]),
            &TileConfig::uniform(5),
        )
        .unwrap();
        // Bucket 0 centre is 0.9.
        assert_eq!(m.inverse(&item! { "n" => 0 }).unwrap(), item! { "n" => 1 });
        // Bucket 4 centre is 8.1.
        assert_eq!(m.inverse(&item! { "n" => 4 }).unwrap(), item! { "n" => 8 });
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn image_order_follows_domain_names() {
        let m = TileMapping::new(
            Space::new([
                ("b", Dimension::double(0.0, 1.0)),
                ("z", Dimension::integer(0, 3)),
                ("a", Dimension::double(0.0, 1.0)),
            ]),
            &TileConfig::uniform(2).with_field("a", 7),
        )
        .unwrap();
        assert_eq!(m.image().names(), ["z", "a", "b"]);
        assert_eq!(m.image().field("a"), Some(&Dimension::integer(0, 6)));
        assert_eq!(m.buckets()["a"], 7);
        assert_eq!(m.ranges()["z"], 3.0);
    }

    #[test]
    fn char_fields_are_unsupported() {
        let err = TileMapping::new(
            Space::new([("c", Dimension::Char)]),
            &TileConfig::uniform(2),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MappingError::UnsupportedDimension {
                kind: DimensionKind::Char,
                ..
            }
        ));
    }

    #[test]
    fn configuration_errors_surface() {
        let err = TileMapping::new(
            Space::new([("x", Dimension::double(0.0, 1.0))]),
            &TileConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            MappingError::Config(ConfigError::MissingBuckets { field: "x".into() })
        );
    }

    proptest! {
        #[test]
        fn inverse_lands_in_the_same_bucket(buckets in 1u32..20, k in 0i64..20) {
            let m = unit(buckets);
            let k = k % i64::from(buckets);
            let centre = m.inverse(&item! { "x" => k }).unwrap();
            prop_assert_eq!(m.value(&centre).unwrap(), item! { "x" => k });
        }

        #[test]
        fn forward_stays_in_image(buckets in 1u32..20, v in 2.0f64..=3.0) {
            let m = unit(buckets);
            let input = item! { "x" => v };
            prop_assert!(m.value(&input).is_ok());
        }
    }
}
