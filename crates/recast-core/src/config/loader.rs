//! Config loader — reads `~/.recast/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.recast/config.json`
//! 3. Environment variables `RECAST_<SECTION>__<FIELD>` (override JSON)
//!
//! Numeric defaults left unset by both stay `None`; per-call resolution then
//! falls back to `RECAST_TEMPERATURE` / `RECAST_MAX_TOKENS` /
//! `RECAST_TIMEOUT_SECS` and finally the built-in values.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::{Config, ProviderConfig};
use crate::types::ProviderId;

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the default path + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path
        .map(PathBuf::from)
        .unwrap_or_else(get_config_path);

    apply_env_overrides(load_config_from_path(&config_path), |key| {
        std::env::var(key).ok()
    })
}

/// Load config from a specific file path, without env overrides.
fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return Config::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            Config::default()
        }
    }
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path
        .map(PathBuf::from)
        .unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config).map_err(std::io::Error::other)?;

    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment variable overrides on top of a loaded config.
///
/// Env var format: `RECAST_<SECTION>__<FIELD>` (double underscore as delimiter).
///
/// Supported overrides:
/// - `RECAST_DEFAULTS__MODEL` → `defaults.model`
/// - `RECAST_DEFAULTS__TEMPERATURE` → `defaults.temperature`
/// - `RECAST_DEFAULTS__MAX_TOKENS` → `defaults.max_tokens`
/// - `RECAST_DEFAULTS__TIMEOUT_SECS` → `defaults.timeout_secs`
/// - `RECAST_PROVIDERS__<NAME>__API_KEY` → `providers.<name>.api_key`
/// - `RECAST_PROVIDERS__<NAME>__API_BASE` → `providers.<name>.api_base`
fn apply_env_overrides<F>(mut config: Config, env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = env("RECAST_DEFAULTS__MODEL") {
        config.defaults.model = val;
    }
    if let Some(val) = env("RECAST_DEFAULTS__TEMPERATURE") {
        if let Ok(t) = val.parse::<f64>() {
            config.defaults.temperature = Some(t);
        }
    }
    if let Some(val) = env("RECAST_DEFAULTS__MAX_TOKENS") {
        if let Ok(n) = val.parse::<u32>() {
            config.defaults.max_tokens = Some(n);
        }
    }
    if let Some(val) = env("RECAST_DEFAULTS__TIMEOUT_SECS") {
        if let Ok(n) = val.parse::<u64>() {
            config.defaults.timeout_secs = Some(n);
        }
    }

    for provider in ProviderId::ALL {
        apply_provider_env(config.providers.get_mut(provider), provider, &env);
    }

    config
}

/// Apply env var overrides for a single provider.
fn apply_provider_env<F>(provider: &mut ProviderConfig, id: ProviderId, env: &F)
where
    F: Fn(&str) -> Option<String>,
{
    let name = id.as_str().to_uppercase();
    if let Some(val) = env(&format!("RECAST_PROVIDERS__{name}__API_KEY")) {
        provider.api_key = val;
    }
    if let Some(val) = env(&format!("RECAST_PROVIDERS__{name}__API_BASE")) {
        provider.api_base = Some(val);
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
