//! The shopper's watched items, enriched with the latest snapshot.

use bravo_core::{Special, SpecialIntel, WatchedItem};
use rust_decimal::Decimal;

use crate::catalog::SnapshotIndex;
use crate::prediction::prediction_text;
use crate::verdict::{compute_verdict, Verdict};

#[derive(Debug, Clone)]
pub struct WatchlistEntry<'a> {
    pub item: &'a WatchedItem,
    pub special: Option<&'a Special>,
    pub intel: Option<&'a SpecialIntel>,
    pub verdict: Verdict,
    /// Urgency text for items not on special now.
    pub prediction: String,
}

#[derive(Debug, Clone, Default)]
pub struct WatchlistView<'a> {
    entries: Vec<WatchlistEntry<'a>>,
}

impl<'a> WatchlistView<'a> {
    /// Pairs every watched item with its special, intel, and verdict.
    /// Watchlist order is preserved.
    #[must_use]
    pub fn build(items: &'a [WatchedItem], index: &SnapshotIndex<'a>) -> Self {
        let entries = items
            .iter()
            .map(|item| {
                let key = item.key();
                let special = index.special(&key);
                let intel = index.intel(&key);
                let prediction = prediction_text(
                    intel.and_then(|i| i.expected_days_until_next),
                    intel.and_then(|i| i.days_since_last_special),
                );
                WatchlistEntry {
                    item,
                    special,
                    intel,
                    verdict: compute_verdict(special, intel),
                    prediction,
                }
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[WatchlistEntry<'a>] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Watched items with a live special.
    pub fn on_sale(&self) -> impl Iterator<Item = &WatchlistEntry<'a>> {
        self.entries.iter().filter(|e| e.special.is_some())
    }

    /// Watched items without a live special, soonest expected sale first.
    /// Items with no estimate go last; ties keep watchlist order.
    #[must_use]
    pub fn waiting(&self) -> Vec<&WatchlistEntry<'a>> {
        let mut waiting: Vec<&WatchlistEntry<'a>> =
            self.entries.iter().filter(|e| e.special.is_none()).collect();
        waiting.sort_by_key(|e| {
            let expected = e.intel.and_then(|i| i.expected_days_until_next);
            (expected.is_none(), expected)
        });
        waiting
    }

    fn savings(&self) -> Vec<Decimal> {
        self.entries
            .iter()
            .filter_map(|e| e.special.and_then(Special::positive_savings))
            .collect()
    }

    /// Sum of `original - current` over on-sale items priced below their original.
    #[must_use]
    pub fn total_savings(&self) -> Decimal {
        self.savings().into_iter().sum()
    }

    /// Number of on-sale items contributing to [`Self::total_savings`].
    #[must_use]
    pub fn savings_count(&self) -> usize {
        self.savings().len()
    }
}

#[cfg(test)]
mod tests {
    use bravo_core::Store;

    use super::*;
    use crate::test_support::{dec, discounted, intel};
    use crate::verdict::VerdictKind;

    fn watched(store: Store, id: &str) -> WatchedItem {
        WatchedItem {
            store,
            product_id: id.to_string(),
            name: format!("Item {id}"),
        }
    }

    #[test]
    fn splits_on_sale_and_waiting_in_watchlist_order() {
        let specials = vec![
            discounted(Store::Coles, "2", 45),
            discounted(Store::Coles, "4", 10),
        ];
        let intel_rows = vec![SpecialIntel {
            expected_days_until_next: Some(2),
            days_since_last_special: Some(20),
            ..intel(Store::Coles, "1", "Item 1")
        }];
        let items = vec![
            watched(Store::Coles, "1"),
            watched(Store::Coles, "2"),
            watched(Store::Coles, "3"),
            watched(Store::Coles, "4"),
        ];
        let index = SnapshotIndex::new(&specials, &intel_rows);
        let view = WatchlistView::build(&items, &index);

        let on_sale: Vec<&str> = view.on_sale().map(|e| e.item.product_id.as_str()).collect();
        let waiting: Vec<&str> = view.waiting().iter().map(|e| e.item.product_id.as_str()).collect();
        assert_eq!(on_sale, vec!["2", "4"]);
        assert_eq!(waiting, vec!["1", "3"]);

        let first = &view.entries()[0];
        assert_eq!(first.verdict.kind, VerdictKind::Wait);
        assert_eq!(first.prediction, "Expected back in ~2 days");
        assert_eq!(view.entries()[2].verdict.headline, "No data yet");
        assert_eq!(view.entries()[2].prediction, "Hard to predict");
    }

    #[test]
    fn waiting_orders_by_expected_days_with_unknown_last() {
        let intel_rows = vec![
            SpecialIntel {
                expected_days_until_next: Some(30),
                ..intel(Store::Coles, "a", "Item a")
            },
            SpecialIntel {
                expected_days_until_next: Some(2),
                ..intel(Store::Coles, "b", "Item b")
            },
            intel(Store::Coles, "c", "Item c"),
            SpecialIntel {
                expected_days_until_next: Some(-3),
                ..intel(Store::Woolworths, "d", "Item d")
            },
            SpecialIntel {
                expected_days_until_next: Some(2),
                ..intel(Store::Woolworths, "e", "Item e")
            },
        ];
        let items = vec![
            watched(Store::Coles, "c"),
            watched(Store::Coles, "x"),
            watched(Store::Coles, "a"),
            watched(Store::Coles, "b"),
            watched(Store::Woolworths, "d"),
            watched(Store::Woolworths, "e"),
        ];
        let index = SnapshotIndex::new(&[], &intel_rows);
        let view = WatchlistView::build(&items, &index);

        let waiting: Vec<&str> = view.waiting().iter().map(|e| e.item.product_id.as_str()).collect();
        assert_eq!(waiting, vec!["d", "b", "e", "a", "c", "x"]);
        // Watchlist order itself is untouched.
        assert_eq!(view.entries()[0].item.product_id, "c");
    }

    #[test]
    fn total_savings_counts_only_real_price_drops() {
        let specials = vec![
            Special {
                original_price: Some(dec("10.00")),
                current_price: dec("6.50"),
                ..discounted(Store::Coles, "1", 35)
            },
            Special {
                original_price: Some(dec("4.00")),
                current_price: dec("4.00"),
                ..discounted(Store::Coles, "2", 0)
            },
            Special {
                original_price: Some(dec("3.00")),
                current_price: dec("2.25"),
                ..discounted(Store::Woolworths, "3", 25)
            },
            discounted(Store::Woolworths, "4", 30),
        ];
        let items = vec![
            watched(Store::Coles, "1"),
            watched(Store::Coles, "2"),
            watched(Store::Woolworths, "3"),
            watched(Store::Woolworths, "4"),
        ];
        let index = SnapshotIndex::new(&specials, &[]);
        let view = WatchlistView::build(&items, &index);
        assert_eq!(view.total_savings(), dec("4.25"));
        assert_eq!(view.savings_count(), 2);
    }

    #[test]
    fn empty_watchlist_has_no_savings() {
        let index = SnapshotIndex::new(&[], &[]);
        let view = WatchlistView::build(&[], &index);
        assert!(view.is_empty());
        assert_eq!(view.total_savings(), Decimal::ZERO);
    }
}
