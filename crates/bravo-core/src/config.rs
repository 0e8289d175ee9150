use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("BRAVO_ENV", "development"));
    let log_level = or_default("BRAVO_LOG_LEVEL", env.default_log_level());

    let specials_path = PathBuf::from(or_default("BRAVO_SPECIALS_PATH", "./data/specials.json"));
    let intel_path = PathBuf::from(or_default("BRAVO_INTEL_PATH", "./data/special_intel.json"));
    let watchlist_path =
        PathBuf::from(or_default("BRAVO_WATCHLIST_PATH", "./data/watchlist.yaml"));

    let search_specials_limit = parse_usize("BRAVO_SEARCH_SPECIALS_LIMIT", "40")?;
    let search_intel_limit = parse_usize("BRAVO_SEARCH_INTEL_LIMIT", "60")?;
    let search_min_query_len = parse_usize("BRAVO_SEARCH_MIN_QUERY_LEN", "2")?;

    if search_specials_limit == 0 && search_intel_limit == 0 {
        return Err(ConfigError::Validation(
            "BRAVO_SEARCH_SPECIALS_LIMIT and BRAVO_SEARCH_INTEL_LIMIT cannot both be 0".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        log_level,
        specials_path,
        intel_path,
        watchlist_path,
        search_specials_limit,
        search_intel_limit,
        search_min_query_len,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
