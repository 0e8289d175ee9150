//! Read-only queries over a loaded snapshot of both tables.

use std::collections::{BTreeSet, HashMap};

use bravo_core::{FrequencyClass, ProductKey, Special, SpecialIntel, Store};

use crate::verdict::{compute_verdict, Verdict};

/// Keyed view over one snapshot of specials and intel.
///
/// Borrows the snapshot; build a fresh index whenever a new snapshot is loaded.
#[derive(Debug, Default)]
pub struct SnapshotIndex<'a> {
    specials: HashMap<ProductKey, &'a Special>,
    intel: HashMap<ProductKey, &'a SpecialIntel>,
}

impl<'a> SnapshotIndex<'a> {
    /// Indexes both tables. On a repeated key the first row wins.
    #[must_use]
    pub fn new(specials: &'a [Special], intel: &'a [SpecialIntel]) -> Self {
        let mut index = Self::default();
        for special in specials {
            index.specials.entry(special.key()).or_insert(special);
        }
        for row in intel {
            index.intel.entry(row.key()).or_insert(row);
        }
        tracing::debug!(
            specials = index.specials.len(),
            intel = index.intel.len(),
            "indexed snapshot"
        );
        index
    }

    #[must_use]
    pub fn special(&self, key: &ProductKey) -> Option<&'a Special> {
        self.specials.get(key).copied()
    }

    #[must_use]
    pub fn intel(&self, key: &ProductKey) -> Option<&'a SpecialIntel> {
        self.intel.get(key).copied()
    }

    /// Verdict for one product from whatever the snapshot knows about it.
    #[must_use]
    pub fn verdict(&self, key: &ProductKey) -> Verdict {
        compute_verdict(self.special(key), self.intel(key))
    }
}

fn by_discount_desc(specials: &mut [&Special]) {
    specials.sort_by_key(|s| std::cmp::Reverse(s.discount_or_zero()));
}

/// Current specials narrowed to one store and/or one category, deepest
/// discount first with absent discounts last.
///
/// Categories compare after trimming, the same way [`categories`] lists them.
#[must_use]
pub fn current_specials<'a>(
    specials: &'a [Special],
    store: Option<Store>,
    category: Option<&str>,
) -> Vec<&'a Special> {
    let category = category.map(str::trim);
    let mut picked: Vec<&Special> = specials
        .iter()
        .filter(|s| store.is_none_or(|st| s.store == st))
        .filter(|s| category.is_none_or(|c| s.category.as_deref().map(str::trim) == Some(c)))
        .collect();
    picked.sort_by_key(|s| (s.discount_pct.is_none(), std::cmp::Reverse(s.discount_pct)));
    picked
}

/// Specials with a known discount, deepest first.
#[must_use]
pub fn top_discounts(specials: &[Special], limit: usize) -> Vec<&Special> {
    let mut picked: Vec<&Special> = specials
        .iter()
        .filter(|s| s.discount_pct.is_some())
        .collect();
    by_discount_desc(&mut picked);
    picked.truncate(limit);
    picked
}

/// Specials whose intel says the item is rare and currently on special,
/// deepest discount first.
#[must_use]
pub fn rare_deals<'a>(
    specials: &'a [Special],
    intel: &[SpecialIntel],
    limit: usize,
) -> Vec<&'a Special> {
    let rare_now: std::collections::HashSet<ProductKey> = intel
        .iter()
        .filter(|i| i.is_on_special_now && i.frequency_class == Some(FrequencyClass::Rare))
        .map(SpecialIntel::key)
        .collect();

    if rare_now.is_empty() {
        return Vec::new();
    }

    let mut picked: Vec<&Special> = specials
        .iter()
        .filter(|s| rare_now.contains(&s.key()))
        .collect();
    by_discount_desc(&mut picked);
    picked.truncate(limit);
    picked
}

/// Distinct non-empty categories across the specials, sorted.
#[must_use]
pub fn categories(specials: &[Special]) -> Vec<String> {
    specials
        .iter()
        .filter_map(|s| s.category.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
