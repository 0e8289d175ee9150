//! Display semantics for the frequency classification.
//!
//! The three-dot indicator fills one dot per step of frequency:
//! `frequent` 3, `sometimes` 2, `rare` 1, unclassified 0.

use bravo_core::{FrequencyClass, SpecialIntel};
use serde::Serialize;

use crate::display::Tone;

/// Items seen on special at most this many times, with no classification,
/// are shown as newly spotted.
const NEW_ITEM_MAX_SIGHTINGS: u32 = 1;

/// Label, tone, and dot fill for a frequency tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrequencyDisplay {
    /// `"Frequent"`, `"Sometimes"`, `"Rare"`, or empty when unclassified.
    pub label: &'static str,
    pub tone: Tone,
    /// Filled dots out of [`FrequencyDisplay::DOTS`].
    pub filled: u8,
}

impl FrequencyDisplay {
    pub const DOTS: u8 = 3;

    #[must_use]
    pub fn for_class(fc: Option<FrequencyClass>) -> Self {
        match fc {
            Some(FrequencyClass::Frequent) => Self {
                label: "Frequent",
                tone: Tone::Positive,
                filled: 3,
            },
            Some(FrequencyClass::Sometimes) => Self {
                label: "Sometimes",
                tone: Tone::Neutral,
                filled: 2,
            },
            Some(FrequencyClass::Rare) => Self {
                label: "Rare",
                tone: Tone::Warning,
                filled: 1,
            },
            None => Self {
                label: "",
                tone: Tone::Muted,
                filled: 0,
            },
        }
    }

    /// Renders the indicator as text dots, e.g. `●●○`.
    #[must_use]
    pub fn dots(&self) -> String {
        (0..Self::DOTS)
            .map(|i| if i < self.filled { '●' } else { '○' })
            .collect()
    }
}

/// The frequency indicator with its longer shopper-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleSignal {
    pub display: FrequencyDisplay,
    /// No classification yet and at most one sighting.
    pub is_new: bool,
    pub label: &'static str,
    pub detail: Option<String>,
}

impl SaleSignal {
    /// Builds the signal for a product. Absent intel reads as a new item.
    #[must_use]
    pub fn from_intel(intel: Option<&SpecialIntel>) -> Self {
        let fc = intel.and_then(|i| i.frequency_class);
        let total_times = intel.map_or(0, |i| i.total_times_on_special);
        let avg_days = intel.and_then(|i| i.avg_frequency_days);
        let is_new = fc.is_none() && total_times <= NEW_ITEM_MAX_SIGHTINGS;

        let label = match fc {
            _ if is_new => "Just spotted",
            Some(FrequencyClass::Frequent) => "On sale often",
            Some(FrequencyClass::Sometimes) => "Sometimes on sale",
            Some(FrequencyClass::Rare) => "Rarely on sale",
            None => "Just spotted",
        };

        let detail = if is_new {
            Some("No sale history yet".to_string())
        } else {
            avg_days.map(|avg| format!("Every ~{avg}d"))
        };

        Self {
            display: FrequencyDisplay::for_class(fc),
            is_new,
            label,
            detail,
        }
    }
}
