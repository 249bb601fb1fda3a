//! The [`Mapping`] trait and mapping composition.

use taskspace_core::Item;
use taskspace_space::Space;

use crate::error::MappingError;

/// A transform between a domain space and an image space.
///
/// Implementors supply the two spaces and the unchecked transforms;
/// [`value`](Mapping::value) and [`inverse`](Mapping::inverse) wrap them
/// with membership checks on both sides.
///
/// # Contract
///
/// For every item `x` that is a member of the domain, `forward(x)` is a
/// member of the image. For every member `y` of the image, `backward(y)`
/// is a member of the domain. Fields the mapping does not know are passed
/// through unchanged by the unchecked transforms.
pub trait Mapping {
    /// The input space.
    fn domain(&self) -> &Space;

    /// The output space.
    fn image(&self) -> &Space;

    /// Transform a domain item without checking membership.
    fn forward(&self, item: &Item) -> Item;

    /// Transform an image item back without checking membership.
    fn backward(&self, item: &Item) -> Item;

    /// Checked forward transform.
    ///
    /// Verifies `item` against the domain, applies
    /// [`forward`](Mapping::forward), then verifies the result against the
    /// image.
    fn value(&self, item: &Item) -> Result<Item, MappingError> {
        self.domain().contains(item)?;
        let out = self.forward(item);
        self.image().contains(&out)?;
        Ok(out)
    }

    /// Checked backward transform, symmetric to [`value`](Mapping::value).
    fn inverse(&self, item: &Item) -> Result<Item, MappingError> {
        self.image().contains(item)?;
        let out = self.backward(item);
        self.domain().contains(&out)?;
        Ok(out)
    }
}

impl<M: Mapping + ?Sized> Mapping for Box<M> {
    fn domain(&self) -> &Space {
        (**self).domain()
    }

    fn image(&self) -> &Space {
        (**self).image()
    }

    fn forward(&self, item: &Item) -> Item {
        (**self).forward(item)
    }

    fn backward(&self, item: &Item) -> Item {
        (**self).backward(item)
    }
}

// ── ComposedMapping ────────────────────────────────────────────────

/// `second ∘ first`: the domain of `first` to the image of `second`.
///
/// ```
/// use taskspace_core::{item, Dimension};
/// use taskspace_map::{ComposedMapping, Mapping, OffsetMapping, TileConfig, TileMapping};
/// use taskspace_space::Space;
///
/// let offset = OffsetMapping::new(Space::new([("x", Dimension::integer(10, 19))])).unwrap();
/// let tile = TileMapping::new(offset.image().clone(), &TileConfig::uniform(2)).unwrap();
/// let both = ComposedMapping::new(offset, tile).unwrap();
///
/// assert_eq!(both.value(&item! { "x" => 12 }).unwrap(), item! { "x" => 0 });
/// assert_eq!(both.value(&item! { "x" => 19 }).unwrap(), item! { "x" => 1 });
/// ```
#[derive(Clone, Debug)]
pub struct ComposedMapping<A, B> {
    first: A,
    second: B,
}

impl<A: Mapping, B: Mapping> ComposedMapping<A, B> {
    /// Chain two mappings. The image of `first` must equal the domain of
    /// `second`.
    pub fn new(first: A, second: B) -> Result<Self, MappingError> {
        if first.image() != second.domain() {
            return Err(MappingError::IncompatibleSpaces);
        }
        Ok(Self { first, second })
    }

    /// The inner mapping.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The outer mapping.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Split back into the two mappings.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Mapping, B: Mapping> Mapping for ComposedMapping<A, B> {
    fn domain(&self) -> &Space {
        self.first.domain()
    }

    fn image(&self) -> &Space {
        self.second.image()
    }

    fn forward(&self, item: &Item) -> Item {
        self.second.forward(&self.first.forward(item))
    }

    fn backward(&self, item: &Item) -> Item {
        self.first.backward(&self.second.backward(item))
    }
}
