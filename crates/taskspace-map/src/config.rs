//! Tile bucket configuration and its validation.

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;
use taskspace_space::Space;

// ── TileConfig ─────────────────────────────────────────────────────

/// Bucket counts for a [`TileMapping`](crate::TileMapping).
///
/// Each numeric field takes its count from `buckets` if listed there,
/// otherwise from `default_buckets`. The default configuration has no
/// default count, so every field must be listed explicitly.
///
/// ```
/// use taskspace_map::TileConfig;
///
/// let config = TileConfig::uniform(8).with_field("velocity", 16);
/// assert_eq!(config.buckets_for("position"), Some(8));
/// assert_eq!(config.buckets_for("velocity"), Some(16));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileConfig {
    /// Count used for fields not listed in `buckets`. Default: `None`.
    pub default_buckets: Option<u32>,
    /// Per-field overrides.
    pub buckets: IndexMap<String, u32>,
}

impl TileConfig {
    /// Every field gets `n` buckets.
    pub fn uniform(n: u32) -> Self {
        Self {
            default_buckets: Some(n),
            buckets: IndexMap::new(),
        }
    }

    /// Override the count for one field.
    pub fn with_field(mut self, name: impl Into<String>, n: u32) -> Self {
        self.buckets.insert(name.into(), n);
        self
    }

    /// Count configured for `name`, falling back to the default.
    pub fn buckets_for(&self, name: &str) -> Option<u32> {
        self.buckets.get(name).copied().or(self.default_buckets)
    }

    /// Resolve a positive bucket count for every field of `domain`, in
    /// [`names`](Space::names) order.
    ///
    /// Fails if a configured name is not a field of `domain`, if a field
    /// has no count, or if any count is zero.
    pub fn resolve(&self, domain: &Space) -> Result<IndexMap<String, u32>, ConfigError> {
        if let Some(name) = self.buckets.keys().find(|n| domain.field(n).is_none()) {
            return Err(ConfigError::UnknownField {
                field: name.clone(),
            });
        }
        if self.default_buckets == Some(0) {
            return Err(ConfigError::ZeroBuckets { field: None });
        }

        let mut resolved = IndexMap::with_capacity(domain.len());
        for name in domain.names() {
            let n = self
                .buckets_for(name)
                .ok_or_else(|| ConfigError::MissingBuckets {
                    field: name.clone(),
                })?;
            if n == 0 {
                return Err(ConfigError::ZeroBuckets {
                    field: Some(name.clone()),
                });
            }
            resolved.insert(name.clone(), n);
        }
        Ok(resolved)
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`TileConfig::resolve()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A field has neither an explicit nor a default bucket count.
    MissingBuckets {
        /// The unconfigured field.
        field: String,
    },
    /// A bucket count of zero. `None` means the default count.
    ZeroBuckets {
        /// The field configured with zero, if not the default.
        field: Option<String>,
    },
    /// A bucket count was configured for a name the domain lacks.
    UnknownField {
        /// The configured name.
        field: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBuckets { field } => {
                write!(f, "no bucket count for field '{field}' and no default")
            }
            Self::ZeroBuckets { field: Some(field) } => {
                write!(f, "bucket count for field '{field}' must be positive")
            }
            Self::ZeroBuckets { field: None } => {
                write!(f, "default bucket count must be positive")
            }
            Self::UnknownField { field } => {
                write!(f, "bucket count configured for unknown field '{field}'")
            }
        }
    }
}

impl Error for ConfigError {}
