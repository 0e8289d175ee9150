//! Flat-file snapshots of the upstream tables.
//!
//! Each snapshot is a list of rows, as JSON (`.json`) or YAML (`.yaml`/`.yml`).
//! Loading enforces the composite-key invariant: at most one row per
//! `(store, product_id)` in a given file.

use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::records::{Special, SpecialIntel, WatchedItem};
use crate::store::ProductKey;
use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

fn format_for(path: &Path) -> Format {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => Format::Yaml,
        _ => Format::Json,
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SnapshotIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let parse_err = |reason: String| ConfigError::SnapshotParse {
        path: path.display().to_string(),
        reason,
    };

    match format_for(path) {
        Format::Json => serde_json::from_str(&content).map_err(|e| parse_err(e.to_string())),
        Format::Yaml => serde_yaml::from_str(&content).map_err(|e| parse_err(e.to_string())),
    }
}

fn ensure_unique_keys<I>(kind: &str, keys: I) -> Result<(), ConfigError>
where
    I: IntoIterator<Item = ProductKey>,
{
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate {kind} row for {key}"
            )));
        }
    }
    Ok(())
}

/// Load the current specials snapshot.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed, or if two rows
/// share a `(store, product_id)` key.
pub fn load_specials(path: &Path) -> Result<Vec<Special>, ConfigError> {
    let specials: Vec<Special> = read_rows(path)?;
    ensure_unique_keys("special", specials.iter().map(Special::key))?;
    tracing::info!(path = %path.display(), count = specials.len(), "loaded specials snapshot");
    Ok(specials)
}

/// Load the sale-history intel snapshot.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed, or if two rows
/// share a `(store, product_id)` key.
pub fn load_intel(path: &Path) -> Result<Vec<SpecialIntel>, ConfigError> {
    let intel: Vec<SpecialIntel> = read_rows(path)?;
    ensure_unique_keys("intel", intel.iter().map(SpecialIntel::key))?;
    tracing::info!(path = %path.display(), count = intel.len(), "loaded intel snapshot");
    Ok(intel)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchlistFile {
    #[serde(default)]
    pub items: Vec<WatchedItem>,
}

/// Load the shopper's watchlist.
///
/// A missing file is an empty watchlist. Duplicate entries are dropped with a
/// warning, keeping the first.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_watchlist(path: &Path) -> Result<WatchlistFile, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no watchlist file; starting empty");
        return Ok(WatchlistFile::default());
    }

    let mut file: WatchlistFile = read_rows(path)?;
    let mut seen = HashSet::new();
    file.items.retain(|item| {
        let fresh = seen.insert(item.key());
        if !fresh {
            tracing::warn!(key = %item.key(), "skipping duplicate watchlist entry");
        }
        fresh
    });
    Ok(file)
}
