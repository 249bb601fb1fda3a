//! The [`Space`] container.

use crate::error::SpaceError;
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::sync::Arc;
use taskspace_core::{Dimension, DimensionKind, Item, ValidationError, Value};

/// Validity predicate over fully assigned items.
pub type Predicate = Arc<dyn Fn(&Item) -> bool + Send + Sync>;

/// Explicit per-kind name ordering supplied at construction.
///
/// Kinds missing from the table fall back to lexicographic order.
pub type Order = IndexMap<DimensionKind, Vec<String>>;

/// A named collection of dimensions.
///
/// # Invariants
///
/// - Names are unique (the spec is a map).
/// - The ordering table holds, for every kind, a permutation of the names
///   of that kind. It is resolved once in [`Space::with_order`] /
///   [`Space::new`] and never changes.
/// - Equality compares the spec and the resolved ordering only. The
///   validity predicate does not take part, so a space built with an
///   explicit lexicographic order equals one built without any order.
///
/// Spaces are immutable; cloning shares the predicate.
///
/// # Examples
///
/// ```
/// use taskspace_core::{item, Dimension};
/// use taskspace_space::Space;
///
/// let space = Space::new([
///     ("b", Dimension::integer(0, 2)),
///     ("a", Dimension::integer(0, 1)),
/// ]);
/// assert_eq!(space.names(), ["a", "b"]);
/// assert_eq!(space.items().unwrap().len(), 6);
/// assert_eq!(space.describe(), "INTS (0 1) (0 2)");
/// assert!(space.contains(&item! { "a" => 1, "b" => 2 }).is_ok());
/// ```
#[derive(Clone)]
pub struct Space {
    spec: IndexMap<String, Dimension>,
    ordering: IndexMap<DimensionKind, Vec<String>>,
    names: Vec<String>,
    valid: Option<Predicate>,
}

impl Space {
    /// Create a space whose names are ordered lexicographically per kind.
    pub fn new<I, S>(spec: I) -> Self
    where
        I: IntoIterator<Item = (S, Dimension)>,
        S: Into<String>,
    {
        let spec = collect_spec(spec);
        let ordering = DimensionKind::ALL
            .iter()
            .map(|&kind| (kind, lexicographic(&spec, kind)))
            .collect();
        Self::assemble(spec, ordering)
    }

    /// Create a space with an explicit per-kind ordering.
    ///
    /// Every list in `order` must be a permutation of the names of its
    /// kind. Kinds absent from `order` are ordered lexicographically.
    pub fn with_order<I, S>(spec: I, order: Order) -> Result<Self, SpaceError>
    where
        I: IntoIterator<Item = (S, Dimension)>,
        S: Into<String>,
    {
        let spec = collect_spec(spec);
        let mut ordering = IndexMap::with_capacity(DimensionKind::ALL.len());
        for kind in DimensionKind::ALL {
            let names = match order.get(&kind) {
                Some(names) => {
                    validate_order(&spec, kind, names)?;
                    names.clone()
                }
                None => lexicographic(&spec, kind),
            };
            ordering.insert(kind, names);
        }
        Ok(Self::assemble(spec, ordering))
    }

    /// An empty space: no dimensions, a single (empty) item.
    pub fn empty() -> Self {
        Self::new(std::iter::empty::<(String, Dimension)>())
    }

    /// Attach a validity predicate used to filter [`items`](Self::items).
    pub fn with_valid<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Item) -> bool + Send + Sync + 'static,
    {
        self.valid = Some(Arc::new(predicate));
        self
    }

    fn assemble(
        mut spec: IndexMap<String, Dimension>,
        ordering: IndexMap<DimensionKind, Vec<String>>,
    ) -> Self {
        spec.sort_keys();
        let names = ordering.values().flatten().cloned().collect();
        Self {
            spec,
            ordering,
            names,
            valid: None,
        }
    }

    /// Number of dimensions.
    pub fn len(&self) -> usize {
        self.spec.len()
    }

    /// `true` if the space declares no dimensions.
    pub fn is_empty(&self) -> bool {
        self.spec.is_empty()
    }

    /// The name → dimension map, sorted by name.
    pub fn spec(&self) -> &IndexMap<String, Dimension> {
        &self.spec
    }

    /// Look up one dimension by name.
    pub fn field(&self, name: &str) -> Option<&Dimension> {
        self.spec.get(name)
    }

    /// Names of one kind, in resolved order.
    pub fn names_of(&self, kind: DimensionKind) -> &[String] {
        self.ordering.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All names: integers, then doubles, then chars.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The dimensions of one kind, in resolved order.
    pub fn of_kind(&self, kind: DimensionKind) -> impl Iterator<Item = (&str, &Dimension)> + '_ {
        self.names_of(kind)
            .iter()
            .filter_map(move |name| self.spec.get(name).map(|d| (name.as_str(), d)))
    }

    /// All dimensions in [`names`](Self::names) order.
    pub fn dimensions(&self) -> impl Iterator<Item = (&str, &Dimension)> + '_ {
        DimensionKind::ALL
            .into_iter()
            .flat_map(move |kind| self.of_kind(kind))
    }

    /// The resolved ordering table (every kind present).
    pub fn ordering(&self) -> &IndexMap<DimensionKind, Vec<String>> {
        &self.ordering
    }

    /// `true` if a validity predicate is attached.
    pub fn has_predicate(&self) -> bool {
        self.valid.is_some()
    }

    /// Evaluate the validity predicate (`true` when none is attached).
    pub fn is_valid(&self, item: &Item) -> bool {
        self.valid.as_ref().map_or(true, |p| p(item))
    }

    /// Check that `item` assigns exactly this space's fields, each within
    /// bounds.
    ///
    /// Fields are checked in [`names`](Self::names) order; the first
    /// failure is returned. The validity predicate is not consulted.
    pub fn contains(&self, item: &Item) -> Result<(), ValidationError> {
        for (name, dim) in self.dimensions() {
            let value = item
                .get(name)
                .ok_or_else(|| ValidationError::MissingField {
                    field: name.to_string(),
                })?;
            dim.check(name, value)?;
        }
        if let Some(extra) = item.keys().find(|k| !self.spec.contains_key(k.as_str())) {
            return Err(ValidationError::UnknownField {
                field: extra.clone(),
            });
        }
        Ok(())
    }

    /// Enumerate every assignment of an all-integer space.
    ///
    /// The product runs over [`names`](Self::names), most significant
    /// first (the last name varies fastest). Items rejected by the
    /// validity predicate are dropped. An empty space yields one empty
    /// item; any non-integer dimension makes the space non-enumerable.
    pub fn items(&self) -> Result<Vec<Item>, SpaceError> {
        let axes = self.integer_axes()?;
        if axes.iter().any(|&(_, min, max)| min > max) {
            return Ok(Vec::new());
        }

        let mut out = Vec::new();
        let mut current: Vec<i64> = axes.iter().map(|&(_, min, _)| min).collect();
        loop {
            let item: Item = axes
                .iter()
                .zip(&current)
                .map(|(&(name, _, _), &v)| (name.to_string(), Value::Int(v)))
                .collect();
            if self.is_valid(&item) {
                out.push(item);
            }

            // Odometer step: bump the last axis, carrying leftwards.
            let mut i = axes.len();
            loop {
                if i == 0 {
                    return Ok(out);
                }
                i -= 1;
                if current[i] < axes[i].2 {
                    current[i] += 1;
                    break;
                }
                current[i] = axes[i].1;
            }
        }
    }

    /// Number of raw integer combinations, ignoring the predicate.
    pub fn cardinality(&self) -> Result<u64, SpaceError> {
        let mut total: u64 = 1;
        for (_, min, max) in self.integer_axes()? {
            if min > max {
                return Ok(0);
            }
            let width = max
                .checked_sub(min)
                .and_then(|w| u64::try_from(w).ok())
                .and_then(|w| w.checked_add(1))
                .ok_or(SpaceError::CardinalityOverflow)?;
            total = total
                .checked_mul(width)
                .ok_or(SpaceError::CardinalityOverflow)?;
        }
        Ok(total)
    }

    fn integer_axes(&self) -> Result<Vec<(&str, i64, i64)>, SpaceError> {
        self.dimensions()
            .map(|(name, dim)| match *dim {
                Dimension::Integer { min, max } => Ok((name, min, max)),
                other => Err(SpaceError::NotEnumerable {
                    name: name.to_string(),
                    kind: other.kind(),
                }),
            })
            .collect()
    }

    /// Canonical range description:
    /// `INTS (a b)... DOUBLES (a b)... CHARCOUNT n`, empty sections omitted.
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        for kind in [DimensionKind::Integer, DimensionKind::Double] {
            if self.names_of(kind).is_empty() {
                continue;
            }
            parts.push(kind.keyword().to_string());
            parts.extend(self.of_kind(kind).map(|(_, d)| d.to_string()));
        }
        let chars = self.names_of(DimensionKind::Char).len();
        if chars > 0 {
            parts.push(format!("CHARCOUNT {chars}"));
        }
        parts.join(" ")
    }

    /// Name listing: `INTS n... DOUBLES n... CHARS n...`, empty sections
    /// omitted.
    pub fn names_description(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for kind in DimensionKind::ALL {
            let names = self.names_of(kind);
            if names.is_empty() {
                continue;
            }
            parts.push(kind.keyword());
            parts.extend(names.iter().map(String::as_str));
        }
        parts.join(" ")
    }
}

fn collect_spec<I, S>(spec: I) -> IndexMap<String, Dimension>
where
    I: IntoIterator<Item = (S, Dimension)>,
    S: Into<String>,
{
    spec.into_iter().map(|(n, d)| (n.into(), d)).collect()
}

fn lexicographic(spec: &IndexMap<String, Dimension>, kind: DimensionKind) -> Vec<String> {
    let mut names: Vec<String> = spec
        .iter()
        .filter(|(_, d)| d.kind() == kind)
        .map(|(n, _)| n.clone())
        .collect();
    names.sort();
    names
}

fn validate_order(
    spec: &IndexMap<String, Dimension>,
    kind: DimensionKind,
    names: &[String],
) -> Result<(), SpaceError> {
    let mut seen = IndexSet::with_capacity(names.len());
    for name in names {
        let dim = spec.get(name).ok_or_else(|| SpaceError::UnknownOrderName {
            name: name.clone(),
        })?;
        if dim.kind() != kind {
            return Err(SpaceError::OrderKindMismatch {
                name: name.clone(),
                listed: kind,
                actual: dim.kind(),
            });
        }
        if !seen.insert(name.as_str()) {
            return Err(SpaceError::DuplicateOrderName { name: name.clone() });
        }
    }
    if let Some((missing, _)) = spec
        .iter()
        .find(|(n, d)| d.kind() == kind && !seen.contains(n.as_str()))
    {
        return Err(SpaceError::IncompleteOrder {
            kind,
            missing: missing.clone(),
        });
    }
    Ok(())
}

impl PartialEq for Space {
    fn eq(&self, other: &Self) -> bool {
        self.spec == other.spec && self.ordering == other.ordering
    }
}

impl Default for Space {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Space")
            .field("spec", &self.spec)
            .field("ordering", &self.ordering)
            .field("has_predicate", &self.valid.is_some())
            .finish()
    }
}
