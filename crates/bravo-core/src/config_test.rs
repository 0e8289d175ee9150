use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.specials_path, Path::new("./data/specials.json"));
    assert_eq!(cfg.intel_path, Path::new("./data/special_intel.json"));
    assert_eq!(cfg.watchlist_path, Path::new("./data/watchlist.yaml"));
    assert_eq!(cfg.search_specials_limit, 40);
    assert_eq!(cfg.search_intel_limit, 60);
    assert_eq!(cfg.search_min_query_len, 2);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("BRAVO_ENV", "production");
    map.insert("BRAVO_LOG_LEVEL", "debug");
    map.insert("BRAVO_SPECIALS_PATH", "/srv/bravo/specials.yaml");
    map.insert("BRAVO_SEARCH_SPECIALS_LIMIT", "10");
    map.insert("BRAVO_SEARCH_INTEL_LIMIT", "15");
    map.insert("BRAVO_SEARCH_MIN_QUERY_LEN", "3");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.specials_path, Path::new("/srv/bravo/specials.yaml"));
    assert_eq!(cfg.search_specials_limit, 10);
    assert_eq!(cfg.search_intel_limit, 15);
    assert_eq!(cfg.search_min_query_len, 3);
}

#[test]
fn log_level_default_follows_environment() {
    for (env, expected) in [("development", "debug"), ("test", "warn"), ("production", "info")] {
        let mut map = HashMap::new();
        map.insert("BRAVO_ENV", env);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, expected, "BRAVO_ENV={env}");
    }
}

#[test]
fn explicit_log_level_overrides_environment_default() {
    let mut map = HashMap::new();
    map.insert("BRAVO_ENV", "production");
    map.insert("BRAVO_LOG_LEVEL", "trace");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "trace");
}

#[test]
fn build_app_config_rejects_non_numeric_limit() {
    let mut map = HashMap::new();
    map.insert("BRAVO_SEARCH_INTEL_LIMIT", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRAVO_SEARCH_INTEL_LIMIT"),
        "expected InvalidEnvVar(BRAVO_SEARCH_INTEL_LIMIT), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_negative_min_query_len() {
    let mut map = HashMap::new();
    map.insert("BRAVO_SEARCH_MIN_QUERY_LEN", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRAVO_SEARCH_MIN_QUERY_LEN"),
        "expected InvalidEnvVar(BRAVO_SEARCH_MIN_QUERY_LEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_both_limits_zero() {
    let mut map = HashMap::new();
    map.insert("BRAVO_SEARCH_SPECIALS_LIMIT", "0");
    map.insert("BRAVO_SEARCH_INTEL_LIMIT", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::Validation(_))),
        "expected Validation error, got: {result:?}"
    );
}

#[test]
fn build_app_config_allows_one_limit_zero() {
    let mut map = HashMap::new();
    map.insert("BRAVO_SEARCH_SPECIALS_LIMIT", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.search_specials_limit, 0);
    assert_eq!(cfg.search_intel_limit, 60);
}
