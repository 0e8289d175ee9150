//! Query prefiltering ahead of [`search_all`].
//!
//! Each source is matched against its own `name` field independently and
//! capped to its own limit, the way the two upstream queries are issued.

use bravo_core::{AppConfig, Special, SpecialIntel, Store};

use crate::fusion::{search_all, SearchResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Trimmed queries shorter than this (in characters) return nothing.
    pub min_query_len: usize,
    pub specials_limit: usize,
    pub intel_limit: usize,
    /// Restrict both sources to one store.
    pub store: Option<Store>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            specials_limit: 40,
            intel_limit: 60,
            store: None,
        }
    }
}

impl SearchOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            min_query_len: config.search_min_query_len,
            specials_limit: config.search_specials_limit,
            intel_limit: config.search_intel_limit,
            store: None,
        }
    }

    #[must_use]
    pub fn with_store(mut self, store: Option<Store>) -> Self {
        self.store = store;
        self
    }
}

fn name_matches(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}

/// Current specials whose name contains `query` (case-insensitive), deepest
/// discount first with absent discounts last, capped at `limit`.
#[must_use]
pub fn match_specials(
    query: &str,
    specials: &[Special],
    store: Option<Store>,
    limit: usize,
) -> Vec<Special> {
    let needle = query.trim().to_lowercase();
    let mut matched: Vec<Special> = specials
        .iter()
        .filter(|s| store.is_none_or(|st| s.store == st))
        .filter(|s| name_matches(&s.name, &needle))
        .cloned()
        .collect();
    matched.sort_by_key(|s| (s.discount_pct.is_none(), std::cmp::Reverse(s.discount_pct)));
    matched.truncate(limit);
    matched
}

/// Intel rows whose name contains `query` (case-insensitive), in source
/// order, capped at `limit`.
#[must_use]
pub fn match_intel(
    query: &str,
    intel: &[SpecialIntel],
    store: Option<Store>,
    limit: usize,
) -> Vec<SpecialIntel> {
    let needle = query.trim().to_lowercase();
    intel
        .iter()
        .filter(|i| store.is_none_or(|st| i.store == st))
        .filter(|i| name_matches(&i.name, &needle))
        .take(limit)
        .cloned()
        .collect()
}

/// Prefilters both sources for `query` and fuses the matches.
#[must_use]
pub fn search(
    query: &str,
    specials: &[Special],
    intel: &[SpecialIntel],
    options: &SearchOptions,
) -> Vec<SearchResult> {
    let trimmed = query.trim();
    if trimmed.chars().count() < options.min_query_len.max(1) {
        tracing::debug!(query = trimmed, "query too short; skipping search");
        return Vec::new();
    }

    let specials = match_specials(trimmed, specials, options.store, options.specials_limit);
    let intel = match_intel(trimmed, intel, options.store, options.intel_limit);
    search_all(trimmed, specials, intel)
}
