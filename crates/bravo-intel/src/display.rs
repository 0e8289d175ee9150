//! Display helpers shared by verdicts, signals, and the CLI.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Semantic color tier. Renderers pick the concrete palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Neutral,
    Warning,
    Muted,
}

/// Formats a dollar amount with two decimals, e.g. `$5.00`.
#[must_use]
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

/// Formats a discount as `"25%"`, or an empty string when absent.
#[must_use]
pub fn format_discount(pct: Option<i32>) -> String {
    pct.map(|p| format!("{p}%")).unwrap_or_default()
}
