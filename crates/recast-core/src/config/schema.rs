//! Configuration schema — what `~/.recast/config.json` may contain.
//!
//! Hierarchy: `Config` → `DefaultsConfig`, `ProvidersConfig` → `ProviderConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! We use `#[serde(rename_all = "camelCase")]` to handle the conversion.

use serde::{Deserialize, Serialize};

use crate::types::{LlmConfig, ProviderId};

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration — loaded from `~/.recast/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub providers: ProvidersConfig,
}

impl Config {
    /// Build per-call settings for `model`, pulling the key and base URL of
    /// `provider` from this config.
    ///
    /// Unset or empty config values stay `None` so the normal fallback chain
    /// (environment, then built-in defaults) still applies.
    pub fn llm_config(&self, model: &str, provider: Option<ProviderId>) -> LlmConfig {
        let creds = provider.map(|p| self.providers.get(p));
        LlmConfig {
            provider,
            model: model.to_string(),
            api_key: creds
                .filter(|c| c.is_configured())
                .map(|c| c.api_key.clone()),
            api_base: creds.and_then(|c| c.api_base.clone()),
            temperature: self.defaults.temperature,
            max_tokens: self.defaults.max_tokens,
            timeout_secs: self.defaults.timeout_secs,
        }
    }
}

// ─────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────

/// Default request settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefaultsConfig {
    /// Model used when the CLI is not told otherwise.
    pub model: String,
    /// Sampling temperature. Unset falls through to `RECAST_TEMPERATURE`, then the built-in default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Maximum tokens to generate per response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Request deadline in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            temperature: None,
            max_tokens: None,
            timeout_secs: None,
        }
    }
}

// ─────────────────────────────────────────────
// Providers
// ─────────────────────────────────────────────

/// Credentials and endpoint for a single provider.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderConfig {
    /// API key for authentication.
    #[serde(default)]
    pub api_key: String,
    /// Custom API base URL (overrides provider default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl ProviderConfig {
    /// Whether this provider has a configured API key.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// One `ProviderConfig` per supported provider.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub google: ProviderConfig,
    #[serde(default)]
    pub openai: ProviderConfig,
    #[serde(default)]
    pub anthropics: ProviderConfig,
}

impl ProvidersConfig {
    pub fn get(&self, provider: ProviderId) -> &ProviderConfig {
        match provider {
            ProviderId::Google => &self.google,
            ProviderId::OpenAi => &self.openai,
            ProviderId::Anthropics => &self.anthropics,
        }
    }

    pub fn get_mut(&mut self, provider: ProviderId) -> &mut ProviderConfig {
        match provider {
            ProviderId::Google => &mut self.google,
            ProviderId::OpenAi => &mut self.openai,
            ProviderId::Anthropics => &mut self.anthropics,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.model, "gemini-2.0-flash");
        assert_eq!(config.defaults.max_tokens, None);
        assert_eq!(config.defaults.temperature, None);
        assert_eq!(config.defaults.timeout_secs, None);
        assert!(!config.providers.google.is_configured());
    }

    #[test]
    fn test_config_from_json_camel_case() {
        let json = serde_json::json!({
            "defaults": {
                "model": "gpt-4o",
                "maxTokens": 4096,
                "timeoutSecs": 30
            },
            "providers": {
                "openai": { "apiKey": "sk-123", "apiBase": "http://localhost:8080/v1" }
            }
        });

        let config: Config = serde_json::from_value(json).unwrap();
        assert_eq!(config.defaults.model, "gpt-4o");
        assert_eq!(config.defaults.max_tokens, Some(4096));
        assert_eq!(config.defaults.timeout_secs, Some(30));
        // Missing fields stay unset
        assert_eq!(config.defaults.temperature, None);
        assert!(config.providers.openai.is_configured());
        assert_eq!(
            config.providers.openai.api_base.as_deref(),
            Some("http://localhost:8080/v1")
        );
    }

    #[test]
    fn test_get_by_provider_id() {
        let mut providers = ProvidersConfig::default();
        providers.get_mut(ProviderId::Anthropics).api_key = "sk-ant".into();
        assert!(providers.get(ProviderId::Anthropics).is_configured());
        assert!(!providers.get(ProviderId::Google).is_configured());
    }

    #[test]
    fn test_llm_config_from_file_config() {
        let mut config = Config::default();
        config.providers.google.api_key = "g-key".into();
        config.defaults.max_tokens = Some(256);

        let llm = config.llm_config("gemini-2.0-flash", Some(ProviderId::Google));
        assert_eq!(llm.provider, Some(ProviderId::Google));
        assert_eq!(llm.api_key.as_deref(), Some("g-key"));
        assert_eq!(llm.max_tokens, Some(256));
        assert_eq!(llm.temperature, None);
    }

    #[test]
    fn test_unset_file_defaults_fall_through_to_env() {
        let llm = Config::default().llm_config("gpt-4o", Some(ProviderId::OpenAi));
        let resolved = llm.resolve_with(ProviderId::OpenAi, |key| {
            (key == crate::types::ENV_TEMPERATURE).then(|| "0.7".to_string())
        });
        assert_eq!(resolved.temperature, 0.7);
        assert_eq!(resolved.max_tokens, crate::types::DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_unset_defaults_are_not_written() {
        let raw = serde_json::to_value(Config::default()).unwrap();
        assert!(raw["defaults"].get("temperature").is_none());
        assert_eq!(raw["defaults"]["model"], "gemini-2.0-flash");
    }

    #[test]
    fn test_llm_config_unconfigured_key_stays_none() {
        let config = Config::default();
        let llm = config.llm_config("gpt-4o", Some(ProviderId::OpenAi));
        assert!(llm.api_key.is_none());

        let inferred = config.llm_config("gpt-4o", None);
        assert!(inferred.provider.is_none());
        assert!(inferred.api_key.is_none());
    }
}
