use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One of the two retailers whose specials are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Store {
    Woolworths,
    Coles,
}

impl Store {
    /// Lowercase identifier as stored upstream, e.g. `"woolworths"`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Store::Woolworths => "woolworths",
            Store::Coles => "coles",
        }
    }

    /// Name shown to shoppers, e.g. `"Woolworths"`.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Store::Woolworths => "Woolworths",
            Store::Coles => "Coles",
        }
    }
}

impl std::fmt::Display for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Store {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "woolworths" => Ok(Store::Woolworths),
            "coles" => Ok(Store::Coles),
            other => Err(ConfigError::UnknownStore(other.to_string())),
        }
    }
}

/// Composite key shared by [`crate::Special`] and [`crate::SpecialIntel`].
///
/// Product ids are only unique within a store, so both halves are needed.
/// Equality on `product_id` is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductKey {
    pub store: Store,
    pub product_id: String,
}

impl ProductKey {
    #[must_use]
    pub fn new(store: Store, product_id: impl Into<String>) -> Self {
        Self {
            store,
            product_id: product_id.into(),
        }
    }
}

impl std::fmt::Display for ProductKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.store, self.product_id)
    }
}

/// Parses the `store:product_id` form produced by [`ProductKey`]'s `Display`.
impl std::str::FromStr for ProductKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (store, product_id) = s
            .split_once(':')
            .ok_or_else(|| ConfigError::InvalidProductKey(s.to_string()))?;
        let product_id = product_id.trim();
        if product_id.is_empty() {
            return Err(ConfigError::InvalidProductKey(s.to_string()));
        }
        Ok(Self::new(store.parse()?, product_id))
    }
}
