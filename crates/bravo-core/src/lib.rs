//! Shared records and configuration for the Bravo deal tracker.
//!
//! Holds the two upstream record kinds ([`Special`] and [`SpecialIntel`]),
//! the `(store, product_id)` key that addresses them, and the loaders that
//! read snapshot files and environment configuration.

pub mod app_config;
pub mod config;
pub mod error;
pub mod records;
pub mod snapshot;
pub mod store;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use records::{FrequencyClass, Special, SpecialIntel, WatchedItem};
pub use snapshot::{load_intel, load_specials, load_watchlist, WatchlistFile};
pub use store::{ProductKey, Store};
