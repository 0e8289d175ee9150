use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// Log filter used when `BRAVO_LOG_LEVEL` is unset.
    #[must_use]
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Development => "debug",
            Environment::Test => "warn",
            Environment::Production => "info",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// JSON or YAML file holding the current specials rows.
    pub specials_path: PathBuf,
    /// JSON or YAML file holding the sale-history intel rows.
    pub intel_path: PathBuf,
    /// YAML file listing the shopper's watched products.
    pub watchlist_path: PathBuf,
    /// Upper bound on current specials fed into one search.
    pub search_specials_limit: usize,
    /// Upper bound on intel rows fed into one search.
    pub search_intel_limit: usize,
    /// Queries shorter than this (after trimming) return no results.
    pub search_min_query_len: usize,
}
