//! Deal intelligence for the Bravo tracker.
//!
//! Turns a current [`Special`](bravo_core::Special) and its sale-history
//! [`SpecialIntel`](bravo_core::SpecialIntel) into a buy/wait/meh
//! [`Verdict`], merges the two searchable sources into one ranked list, and
//! provides the small formatting rules shared by every screen. Everything in
//! this crate is pure and synchronous.

pub mod catalog;
pub mod display;
pub mod frequency;
pub mod fusion;
pub mod prediction;
pub mod search;
pub mod verdict;
pub mod watchlist;

#[cfg(test)]
mod test_support;

pub use catalog::{categories, current_specials, rare_deals, top_discounts, SnapshotIndex};
pub use display::{format_discount, format_price, Tone};
pub use frequency::{FrequencyDisplay, SaleSignal};
pub use fusion::{search_all, SearchResult};
pub use prediction::prediction_text;
pub use search::{match_intel, match_specials, search, SearchOptions};
pub use verdict::{compute_verdict, Verdict, VerdictKind};
pub use watchlist::{WatchlistEntry, WatchlistView};
