//! Merges current specials and sale-history intel into one search result list.
//!
//! Rows live in an arena indexed by `(store, product_id)`. Specials are
//! inserted first, then intel either attaches to an existing row or creates a
//! new one. Display fields always come from whichever record created the row.

use std::collections::HashMap;

use bravo_core::{ProductKey, Special, SpecialIntel, Store};
use serde::Serialize;

/// One product found by a search, with whatever records matched it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub key: ProductKey,
    pub name: String,
    pub store: Store,
    pub image_url: Option<String>,
    pub special: Option<Special>,
    pub intel: Option<SpecialIntel>,
}

impl SearchResult {
    fn from_special(special: Special) -> Self {
        Self {
            key: special.key(),
            name: special.name.clone(),
            store: special.store,
            image_url: special.image_url.clone(),
            special: Some(special),
            intel: None,
        }
    }

    fn from_intel(intel: SpecialIntel) -> Self {
        Self {
            key: intel.key(),
            name: intel.name.clone(),
            store: intel.store,
            image_url: intel.image_url.clone(),
            special: None,
            intel: Some(intel),
        }
    }

    /// Rank used by the final sort: special rows first, then deeper discounts.
    fn rank(&self) -> (bool, std::cmp::Reverse<i32>) {
        match &self.special {
            Some(special) => (false, std::cmp::Reverse(special.discount_or_zero())),
            None => (true, std::cmp::Reverse(0)),
        }
    }
}

/// Fuses two independently filtered sources into one ranked, deduplicated list.
///
/// `specials` and `intel` may have different lengths. A blank query or two
/// empty sources yield an empty list. Rows without a live special keep their
/// insertion order.
#[must_use]
pub fn search_all(
    query: &str,
    specials: Vec<Special>,
    intel: Vec<SpecialIntel>,
) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let special_count = specials.len();
    let intel_count = intel.len();

    let mut rows: Vec<SearchResult> = Vec::with_capacity(special_count + intel_count);
    let mut index: HashMap<ProductKey, usize> = HashMap::with_capacity(rows.capacity());

    for special in specials {
        let key = special.key();
        if index.contains_key(&key) {
            tracing::warn!(%key, "duplicate special in search source; keeping first");
            continue;
        }
        index.insert(key, rows.len());
        rows.push(SearchResult::from_special(special));
    }

    let mut attached = 0usize;
    for record in intel {
        let key = record.key();
        match index.get(&key) {
            Some(&slot) => {
                let row = &mut rows[slot];
                if row.intel.is_none() {
                    row.intel = Some(record);
                    attached += 1;
                } else {
                    tracing::warn!(%key, "duplicate intel in search source; keeping first");
                }
            }
            None => {
                index.insert(key, rows.len());
                rows.push(SearchResult::from_intel(record));
            }
        }
    }

    rows.sort_by_key(SearchResult::rank);

    tracing::debug!(
        query = query.trim(),
        specials = special_count,
        intel = intel_count,
        attached,
        results = rows.len(),
        "fused search results"
    );

    rows
}
