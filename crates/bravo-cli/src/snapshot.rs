//! Loads both snapshot files named by the configuration.

use anyhow::Context;
use bravo_core::{AppConfig, Special, SpecialIntel};
use bravo_intel::SnapshotIndex;

#[derive(Debug, Default)]
pub(crate) struct Snapshot {
    pub specials: Vec<Special>,
    pub intel: Vec<SpecialIntel>,
}

impl Snapshot {
    /// # Errors
    ///
    /// Returns an error if either snapshot file cannot be loaded.
    pub(crate) fn load(config: &AppConfig) -> anyhow::Result<Self> {
        let specials = bravo_core::load_specials(&config.specials_path)
            .with_context(|| format!("loading specials (BRAVO_SPECIALS_PATH={})", config.specials_path.display()))?;
        let intel = bravo_core::load_intel(&config.intel_path)
            .with_context(|| format!("loading intel (BRAVO_INTEL_PATH={})", config.intel_path.display()))?;
        Ok(Self { specials, intel })
    }

    pub(crate) fn index(&self) -> SnapshotIndex<'_> {
        SnapshotIndex::new(&self.specials, &self.intel)
    }
}
