//! Shared HTTP plumbing for the provider adapters.
//!
//! Every adapter builds an [`HttpClient`] per call (credentials + base URL +
//! a `reqwest::Client` carrying the request deadline) and sends its JSON body
//! through [`send_json`], which turns non-2xx statuses and malformed provider
//! envelopes into [`ProviderError`]s.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use recast_core::ResolvedConfig;

use crate::error::ProviderError;
use crate::registry::ProviderSpec;

/// Per-call HTTP handle for one provider.
pub struct HttpClient {
    /// HTTP client with the call's timeout applied.
    http: reqwest::Client,
    /// API base URL (e.g. `"https://api.openai.com/v1"`).
    api_base: String,
    /// Resolved API key.
    api_key: String,
    /// Display name for logs.
    provider: &'static str,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("api_base", &self.api_base)
            .field("provider", &self.provider)
            .finish()
    }
}

impl HttpClient {
    /// Build a client for `spec`, reading the key from the process environment
    /// when the config has none.
    pub fn build(spec: &'static ProviderSpec, config: &ResolvedConfig) -> Result<Self, ProviderError> {
        Self::build_with(spec, config, |key| std::env::var(key).ok())
    }

    /// Same as [`HttpClient::build`] with an injectable environment lookup.
    pub fn build_with<F>(
        spec: &'static ProviderSpec,
        config: &ResolvedConfig,
        env: F,
    ) -> Result<Self, ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = resolve_api_key(config.api_key.as_deref(), spec.env_key, env)?;

        // Resolve API base: config > spec default
        let api_base = config
            .api_base
            .clone()
            .unwrap_or_else(|| spec.default_api_base.to_string());

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        debug!(
            provider = spec.display_name,
            api_base = %api_base,
            timeout = ?config.timeout,
            "Created provider client"
        );

        Ok(HttpClient {
            http,
            api_base,
            api_key,
            provider: spec.display_name,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Full URL for `path` under the API base.
    pub fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Start a POST request to `path` under the API base.
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    /// Send a prepared request and decode the JSON response envelope.
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ProviderError> {
        send_json(self.provider, request).await
    }
}

/// Pick the API key: explicit config value, then `env_key` from the environment.
pub fn resolve_api_key<F>(
    explicit: Option<&str>,
    env_key: &'static str,
    env: F,
) -> Result<String, ProviderError>
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .filter(|k| !k.is_empty())
        .map(String::from)
        .or_else(|| env(env_key).filter(|k| !k.is_empty()))
        .ok_or(ProviderError::MissingApiKey { env_key })
}

/// Send `request`, check the status, and decode the body as `T`.
pub async fn send_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<T, ProviderError> {
    let response = request.send().await.map_err(|e| {
        error!(provider = provider, error = %e, "HTTP request failed");
        ProviderError::Http(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        error!(provider = provider, status = %status, body = %body, "API error");
        return Err(ProviderError::Api { status, body });
    }

    response.json::<T>().await.map_err(|e| {
        error!(provider = provider, error = %e, "Failed to decode provider response");
        ProviderError::Decode(e.to_string())
    })
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
