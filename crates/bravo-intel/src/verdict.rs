//! Buy/wait/meh recommendation from a live special and its sale history.
//!
//! Rules are evaluated top to bottom:
//!
//! 1. On special now: 40%+ off or a `rare` item is a buy; 20-39% off is a
//!    buy unless the item is `frequent`, in which case it is meh; anything
//!    under 20% is meh.
//! 2. Not on special but tracked: always wait, with the detail driven by how
//!    soon the next sale is expected.
//! 3. Nothing known: wait, "No data yet".

use bravo_core::{FrequencyClass, Special, SpecialIntel};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::display::{format_price, Tone};

/// At or above this discount the special is a buy whatever its history.
const STRONG_DISCOUNT_PCT: i32 = 40;
/// At or above this discount the detail calls it out as half price.
const HALF_PRICE_PCT: i32 = 48;
/// Below this discount the special is noise.
const MEANINGFUL_DISCOUNT_PCT: i32 = 20;
/// Next sale expected within this many days: "Sale expected soon".
const SOON_DAYS: i32 = 7;
/// Next sale expected within this many days: "Hold off".
const HOLD_OFF_DAYS: i32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictKind {
    Buy,
    Wait,
    Meh,
}

impl VerdictKind {
    /// Badge text shown above the product name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VerdictKind::Buy => "BUY NOW",
            VerdictKind::Wait => "WAIT",
            VerdictKind::Meh => "YOUR CALL",
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            VerdictKind::Buy => Tone::Positive,
            VerdictKind::Wait => Tone::Warning,
            VerdictKind::Meh => Tone::Muted,
        }
    }
}

impl std::fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerdictKind::Buy => write!(f, "buy"),
            VerdictKind::Wait => write!(f, "wait"),
            VerdictKind::Meh => write!(f, "meh"),
        }
    }
}

/// A recommendation plus the text that explains it. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub kind: VerdictKind,
    pub headline: String,
    pub detail: String,
    /// `original_price - current_price` when the special has an original price.
    pub save_amount: Option<Decimal>,
    /// Display name of the store the verdict refers to.
    pub store_name: Option<&'static str>,
}

/// Computes the recommendation for one product key.
///
/// Either record may be absent; every combination has a defined result.
#[must_use]
pub fn compute_verdict(special: Option<&Special>, intel: Option<&SpecialIntel>) -> Verdict {
    match (special, intel) {
        (Some(special), intel) => special_verdict(special, intel),
        (None, Some(intel)) => intel_only_verdict(intel),
        (None, None) => Verdict {
            kind: VerdictKind::Wait,
            headline: "No data yet".to_string(),
            detail: "Start tracking this item and we'll tell you when it goes on sale.".to_string(),
            save_amount: None,
            store_name: None,
        },
    }
}

fn special_verdict(special: &Special, intel: Option<&SpecialIntel>) -> Verdict {
    let pct = special.discount_or_zero();
    let fc = intel.and_then(|i| i.frequency_class);
    let store = special.store.display_name();
    let price = format_price(special.current_price);

    let buy_headline = || format!("Buy now at {store} for {price}");
    let meh_headline = || format!("{price} at {store}, your call");

    let (kind, headline, detail) = if pct >= STRONG_DISCOUNT_PCT || fc == Some(FrequencyClass::Rare) {
        let days_since = intel.and_then(|i| i.days_since_last_special);
        let detail = match days_since {
            Some(days) if fc == Some(FrequencyClass::Rare) => format!(
                "Last on sale {days} days ago. This is a rare deal, so grab it while you can."
            ),
            _ if pct >= HALF_PRICE_PCT => format!("Half price or better ({pct}% off). Stock up."),
            _ => format!("{pct}% off is a great deal."),
        };
        (VerdictKind::Buy, buy_headline(), detail)
    } else if pct >= MEANINGFUL_DISCOUNT_PCT {
        if fc == Some(FrequencyClass::Frequent) {
            (
                VerdictKind::Meh,
                meh_headline(),
                format!(
                    "{pct}% off, but this item goes on sale often. A better deal may come around soon."
                ),
            )
        } else {
            (
                VerdictKind::Buy,
                buy_headline(),
                format!("{pct}% off is a good price for this item."),
            )
        }
    } else {
        (
            VerdictKind::Meh,
            meh_headline(),
            format!("Only {pct}% off. Small discount, it may get better."),
        )
    };

    Verdict {
        kind,
        headline,
        detail,
        save_amount: special.price_drop(),
        store_name: Some(store),
    }
}

fn intel_only_verdict(intel: &SpecialIntel) -> Verdict {
    let expected = intel.expected_days_until_next;
    let avg_days = intel.avg_frequency_days;
    let days_since = intel.days_since_last_special;
    let last_pct = intel.last_discount_pct;

    let (headline, detail) = match expected {
        Some(expected) if expected <= SOON_DAYS => {
            let next = if expected <= 0 {
                "Next sale is due any day now.".to_string()
            } else {
                format!("Next sale expected in ~{expected} days.")
            };
            let detail = match avg_days {
                Some(avg) => format!("Usually on sale every ~{avg} days. {next}"),
                None => next,
            };
            ("Sale expected soon", detail)
        }
        Some(expected) if expected <= HOLD_OFF_DAYS => {
            let cadence = match avg_days {
                Some(avg) => format!("Goes on sale every ~{avg} days."),
                None => "A sale should come around within two weeks.".to_string(),
            };
            let detail = match last_pct {
                Some(pct) => format!("{cadence} Last time it was {pct}% off."),
                None => cadence,
            };
            ("Hold off", detail)
        }
        _ => match (days_since, avg_days) {
            (Some(since), Some(avg)) => (
                "Wait for a sale",
                format!("Last on sale {since} days ago. Usually on sale every ~{avg} days."),
            ),
            _ if intel.total_times_on_special > 0 => (
                "Wait for a sale",
                "Not enough sale history to predict the next one yet.".to_string(),
            ),
            _ => (
                "Wait for a sale",
                "No sale history yet. We just started tracking this item.".to_string(),
            ),
        },
    };

    Verdict {
        kind: VerdictKind::Wait,
        headline: headline.to_string(),
        detail,
        save_amount: None,
        store_name: Some(intel.store.display_name()),
    }
}

#[cfg(test)]
#[path = "verdict_test.rs"]
mod tests;
