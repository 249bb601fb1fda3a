//! The identity mapping.

use taskspace_core::Item;
use taskspace_space::Space;

use crate::mapping::Mapping;

/// Maps a space onto itself.
#[derive(Clone, Debug, PartialEq)]
pub struct IdentityMapping {
    space: Space,
}

impl IdentityMapping {
    /// Identity over `space`.
    pub fn new(space: Space) -> Self {
        tracing::debug!(fields = space.len(), "built identity mapping");
        Self { space }
    }
}

impl Mapping for IdentityMapping {
    fn domain(&self) -> &Space {
        &self.space
    }

    fn image(&self) -> &Space {
        &self.space
    }

    fn forward(&self, item: &Item) -> Item {
        item.clone()
    }

    fn backward(&self, item: &Item) -> Item {
        item.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskspace_core::{item, Dimension};

    #[test]
    fn round_trips_mixed_items() {
        let space = Space::new([
            ("a", Dimension::integer(0, 3)),
            ("v", Dimension::double(-1.0, 1.0)),
            ("c", Dimension::Char),
        ]);
        let m = IdentityMapping::new(space.clone());
        let it = item! { "a" => 2, "v" => 0.5, "c" => 'z' };
        assert_eq!(m.value(&it).unwrap(), it);
        assert_eq!(m.inverse(&it).unwrap(), it);
        assert_eq!(m.image(), &space);
    }
}
