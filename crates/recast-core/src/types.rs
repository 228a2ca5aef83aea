//! Core types for Recast — provider identifiers and per-call LLM settings.
//!
//! A caller builds one [`LlmConfig`] per call. Before any provider is touched it
//! is turned into a [`ResolvedConfig`] by [`LlmConfig::resolve`], which applies
//! defaults in a fixed order: explicit value > environment value > built-in default.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

// ─────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────

/// Sampling temperature used when neither the caller nor the environment sets one.
pub const DEFAULT_TEMPERATURE: f64 = 0.0;

/// Completion token limit used when neither the caller nor the environment sets one.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Deadline for the outbound provider request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable overriding the default temperature.
pub const ENV_TEMPERATURE: &str = "RECAST_TEMPERATURE";
/// Environment variable overriding the default max tokens.
pub const ENV_MAX_TOKENS: &str = "RECAST_MAX_TOKENS";
/// Environment variable overriding the default request timeout.
pub const ENV_TIMEOUT_SECS: &str = "RECAST_TIMEOUT_SECS";

// ─────────────────────────────────────────────
// ProviderId
// ─────────────────────────────────────────────

/// The closed set of LLM vendors Recast can talk to.
///
/// Serialized as the lowercase tags `"google"`, `"openai"` and `"anthropics"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    #[serde(rename = "google")]
    Google,
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "anthropics")]
    Anthropics,
}

impl ProviderId {
    /// Every known provider, in registry order.
    pub const ALL: [ProviderId; 3] = [ProviderId::Google, ProviderId::OpenAi, ProviderId::Anthropics];

    /// The wire/config tag for this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Google => "google",
            ProviderId::OpenAi => "openai",
            ProviderId::Anthropics => "anthropics",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known provider tags.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown provider '{0}' (expected one of: google, openai, anthropics)")]
pub struct UnknownProvider(pub String);

impl FromStr for ProviderId {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(ProviderId::Google),
            "openai" => Ok(ProviderId::OpenAi),
            "anthropics" => Ok(ProviderId::Anthropics),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}

// ─────────────────────────────────────────────
// LlmConfig — what the caller passes in
// ─────────────────────────────────────────────

/// Per-call LLM settings as supplied by the caller.
///
/// Only `model` is required. When `provider` is absent it is inferred from the
/// model registry. Optional numeric settings fall back to environment values
/// and then to [`DEFAULT_TEMPERATURE`] / [`DEFAULT_MAX_TOKENS`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LlmConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderId>,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Endpoint override (proxies, self-hosted gateways, mock servers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl LlmConfig {
    /// Settings for `model` with everything else left to defaults.
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Pin the provider instead of inferring it from the model.
    pub fn with_provider(mut self, provider: ProviderId) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Use an explicit API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Send requests to a different base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Fill every missing setting, reading overrides from the process environment.
    pub fn resolve(&self, provider: ProviderId) -> ResolvedConfig {
        self.resolve_with(provider, |key| std::env::var(key).ok())
    }

    /// Fill every missing setting using `env` to look up environment overrides.
    ///
    /// Precedence per field: explicit value > environment value > built-in default.
    pub fn resolve_with<F>(&self, provider: ProviderId, env: F) -> ResolvedConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let temperature = self
            .temperature
            .or_else(|| env_parse(&env, ENV_TEMPERATURE))
            .unwrap_or(DEFAULT_TEMPERATURE);
        let max_tokens = self
            .max_tokens
            .or_else(|| env_parse(&env, ENV_MAX_TOKENS))
            .unwrap_or(DEFAULT_MAX_TOKENS);
        // Zero timeouts count as unset.
        let timeout_secs = self
            .timeout_secs
            .filter(|&secs| nonzero_timeout(secs, "config"))
            .or_else(|| {
                env_parse(&env, ENV_TIMEOUT_SECS).filter(|&secs| nonzero_timeout(secs, ENV_TIMEOUT_SECS))
            })
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        ResolvedConfig {
            provider,
            model: self.model.clone(),
            api_key: self.api_key.clone().filter(|k| !k.is_empty()),
            api_base: self.api_base.clone(),
            temperature,
            max_tokens,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

fn nonzero_timeout(secs: u64, source: &str) -> bool {
    if secs == 0 {
        warn!(source = source, "ignoring zero request timeout");
    }
    secs > 0
}

fn env_parse<F, T>(env: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(var = key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

// ─────────────────────────────────────────────
// ResolvedConfig — what a provider adapter sees
// ─────────────────────────────────────────────

/// Fully populated per-call settings handed to a provider adapter.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub provider: ProviderId,
    pub model: String,
    /// Explicit key only. Adapters apply their own environment fallback.
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout: Duration,
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_provider_id_round_trip_tags() {
        for id in ProviderId::ALL {
            assert_eq!(id.as_str().parse::<ProviderId>().unwrap(), id);
            assert_eq!(id.to_string(), id.as_str());
        }
    }

    #[test]
    fn test_provider_id_unknown() {
        let err = "anthropic".parse::<ProviderId>().unwrap_err();
        assert_eq!(err, UnknownProvider("anthropic".into()));
        assert!(err.to_string().contains("anthropics"));
    }

    #[test]
    fn test_provider_id_serde_tags() {
        let json = serde_json::to_string(&ProviderId::OpenAi).unwrap();
        assert_eq!(json, "\"openai\"");
        let id: ProviderId = serde_json::from_str("\"anthropics\"").unwrap();
        assert_eq!(id, ProviderId::Anthropics);
    }

    #[test]
    fn test_resolve_applies_builtin_defaults() {
        let resolved = LlmConfig::for_model("gpt-4o").resolve_with(ProviderId::OpenAi, env_of(&[]));
        assert_eq!(resolved.temperature, 0.0);
        assert_eq!(resolved.max_tokens, 1024);
        assert_eq!(resolved.timeout, Duration::from_secs(120));
        assert_eq!(resolved.provider, ProviderId::OpenAi);
        assert_eq!(resolved.model, "gpt-4o");
        assert!(resolved.api_key.is_none());
    }

    #[test]
    fn test_resolve_env_beats_default() {
        let env = env_of(&[(ENV_TEMPERATURE, "0.4"), (ENV_MAX_TOKENS, "2048")]);
        let resolved = LlmConfig::for_model("gpt-4o").resolve_with(ProviderId::OpenAi, env);
        assert_eq!(resolved.temperature, 0.4);
        assert_eq!(resolved.max_tokens, 2048);
    }

    #[test]
    fn test_resolve_explicit_beats_env() {
        let env = env_of(&[(ENV_TEMPERATURE, "0.4"), (ENV_MAX_TOKENS, "2048")]);
        let config = LlmConfig {
            temperature: Some(0.9),
            max_tokens: Some(64),
            ..LlmConfig::for_model("gpt-4o")
        };
        let resolved = config.resolve_with(ProviderId::OpenAi, env);
        assert_eq!(resolved.temperature, 0.9);
        assert_eq!(resolved.max_tokens, 64);
    }

    #[test]
    fn test_resolve_ignores_garbage_env() {
        let env = env_of(&[(ENV_MAX_TOKENS, "lots"), (ENV_TIMEOUT_SECS, "-3")]);
        let resolved = LlmConfig::for_model("gpt-4o").resolve_with(ProviderId::OpenAi, env);
        assert_eq!(resolved.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_resolve_zero_timeout_is_unset() {
        let config = LlmConfig {
            timeout_secs: Some(0),
            ..LlmConfig::for_model("gpt-4o")
        };
        let resolved = config.resolve_with(ProviderId::OpenAi, env_of(&[(ENV_TIMEOUT_SECS, "30")]));
        assert_eq!(resolved.timeout, Duration::from_secs(30));

        let resolved = LlmConfig::for_model("gpt-4o")
            .resolve_with(ProviderId::OpenAi, env_of(&[(ENV_TIMEOUT_SECS, "0")]));
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_resolve_drops_empty_api_key() {
        let config = LlmConfig::for_model("gpt-4o").with_api_key("");
        let resolved = config.resolve_with(ProviderId::OpenAi, env_of(&[]));
        assert!(resolved.api_key.is_none());
    }

    #[test]
    fn test_llm_config_camel_case_json() {
        let config: LlmConfig = serde_json::from_value(serde_json::json!({
            "provider": "google",
            "model": "gemini-2.0-flash",
            "apiKey": "k",
            "maxTokens": 10
        }))
        .unwrap();
        assert_eq!(config.provider, Some(ProviderId::Google));
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.max_tokens, Some(10));
        assert!(config.temperature.is_none());
    }
}
