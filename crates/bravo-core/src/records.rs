use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::store::{ProductKey, Store};

/// How often a product goes on special, bucketed by the analytics process
/// from the average interval between sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyClass {
    Frequent,
    Sometimes,
    Rare,
}

impl FrequencyClass {
    /// Lowercase label as stored upstream.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FrequencyClass::Frequent => "frequent",
            FrequencyClass::Sometimes => "sometimes",
            FrequencyClass::Rare => "rare",
        }
    }
}

impl std::fmt::Display for FrequencyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads an optional frequency class, mapping the analytics label `"never"`
/// (a product with zero recorded sales) to `None`.
fn frequency_class_or_never<'de, D>(deserializer: D) -> Result<Option<FrequencyClass>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("never") => Ok(None),
        Some("frequent") => Ok(Some(FrequencyClass::Frequent)),
        Some("sometimes") => Ok(Some(FrequencyClass::Sometimes)),
        Some("rare") => Ok(Some(FrequencyClass::Rare)),
        Some(other) => Err(serde::de::Error::unknown_variant(
            other,
            &["frequent", "sometimes", "rare", "never"],
        )),
    }
}

/// A product currently on special at one store.
///
/// Produced entirely by the upstream scraper for the current observation
/// window; nothing in this workspace mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Special {
    /// Upstream row id, when the source provides one.
    #[serde(default)]
    pub id: Option<String>,
    pub store: Store,
    /// Retailer product id, unique within `store` only.
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Shelf price right now, in dollars.
    pub current_price: Decimal,
    /// Pre-discount price, if the retailer publishes one.
    #[serde(default)]
    pub original_price: Option<Decimal>,
    /// Whole-number percentage off, `0..=100`. `Some(0)` is a real value.
    #[serde(default)]
    pub discount_pct: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub product_url: Option<String>,
    /// Retailer promotion label, e.g. `"half price"` or `"multi buy"`.
    #[serde(default)]
    pub special_type: Option<String>,
    #[serde(default)]
    pub valid_from: Option<NaiveDate>,
    #[serde(default)]
    pub valid_to: Option<NaiveDate>,
    #[serde(default)]
    pub scraped_at: Option<DateTime<Utc>>,
}

impl Special {
    #[must_use]
    pub fn key(&self) -> ProductKey {
        ProductKey::new(self.store, self.product_id.clone())
    }

    /// Discount percentage with an absent value read as zero.
    #[must_use]
    pub fn discount_or_zero(&self) -> i32 {
        self.discount_pct.unwrap_or(0)
    }

    /// `original_price - current_price`, or `None` without an original price.
    ///
    /// The difference is returned as-is, even when it is zero or negative.
    #[must_use]
    pub fn price_drop(&self) -> Option<Decimal> {
        self.original_price.map(|original| original - self.current_price)
    }

    /// The price drop, only when the original price is strictly higher.
    #[must_use]
    pub fn positive_savings(&self) -> Option<Decimal> {
        self.price_drop().filter(|save| *save > Decimal::ZERO)
    }
}

/// Sale-history statistics for one product, computed out-of-band by the
/// analytics process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialIntel {
    #[serde(default)]
    pub id: Option<String>,
    pub store: Store,
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Mean number of days between sales.
    #[serde(default)]
    pub avg_frequency_days: Option<i32>,
    #[serde(default, deserialize_with = "frequency_class_or_never")]
    pub frequency_class: Option<FrequencyClass>,
    #[serde(default)]
    pub days_since_last_special: Option<i32>,
    /// Estimated days until the next sale. Zero or negative means overdue.
    #[serde(default)]
    pub expected_days_until_next: Option<i32>,
    #[serde(default)]
    pub is_on_special_now: bool,
    #[serde(default)]
    pub last_special_date: Option<NaiveDate>,
    #[serde(default)]
    pub last_discount_pct: Option<i32>,
    #[serde(default)]
    pub total_times_on_special: u32,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SpecialIntel {
    #[must_use]
    pub fn key(&self) -> ProductKey {
        ProductKey::new(self.store, self.product_id.clone())
    }
}

/// A product the shopper has bookmarked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchedItem {
    pub store: Store,
    pub product_id: String,
    pub name: String,
}

impl WatchedItem {
    #[must_use]
    pub fn key(&self) -> ProductKey {
        ProductKey::new(self.store, self.product_id.clone())
    }
}
