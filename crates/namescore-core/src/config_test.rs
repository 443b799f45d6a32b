use std::collections::HashMap;
use std::env::VarError;

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
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert!(cfg.is_development());
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.profile_path.is_none());
    assert_eq!(cfg.store_dir.to_str(), Some("./.namescore"));
    assert!(cfg.api_key_hash_salt.is_none());
    assert_eq!(cfg.rate_limit_per_minute, 120);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("NAMESCORE_ENV", "production");
    map.insert("NAMESCORE_BIND_ADDR", "127.0.0.1:8080");
    map.insert("NAMESCORE_LOG_LEVEL", "debug");
    map.insert("NAMESCORE_PROFILE_PATH", "./config/profile.yaml");
    map.insert("NAMESCORE_STORE_DIR", "/var/lib/namescore");
    map.insert("NAMESCORE_API_KEY_HASH_SALT", "pepper");
    map.insert("NAMESCORE_RATE_LIMIT_PER_MINUTE", "30");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert!(!cfg.is_development());
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(
        cfg.profile_path.as_deref().and_then(|p| p.to_str()),
        Some("./config/profile.yaml")
    );
    assert_eq!(cfg.store_dir.to_str(), Some("/var/lib/namescore"));
    assert_eq!(cfg.api_key_hash_salt.as_deref(), Some("pepper"));
    assert_eq!(cfg.rate_limit_per_minute, 30);
}

#[test]
fn build_app_config_treats_blank_profile_path_as_unset() {
    let mut map = HashMap::new();
    map.insert("NAMESCORE_PROFILE_PATH", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.profile_path.is_none());
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("NAMESCORE_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NAMESCORE_BIND_ADDR"),
        "expected InvalidEnvVar(NAMESCORE_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_rate_limit() {
    let mut map = HashMap::new();
    map.insert("NAMESCORE_RATE_LIMIT_PER_MINUTE", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NAMESCORE_RATE_LIMIT_PER_MINUTE"),
        "expected InvalidEnvVar(NAMESCORE_RATE_LIMIT_PER_MINUTE), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_rate_limit() {
    let mut map = HashMap::new();
    map.insert("NAMESCORE_RATE_LIMIT_PER_MINUTE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref reason, .. }) if reason.contains("greater than zero")),
        "expected zero rate limit to be rejected, got: {result:?}"
    );
}
