//! Adapter trait — the per-provider capability set driven by the transformer.
//!
//! An adapter knows three provider-specific things: how to build a client from
//! credentials, how to shape and send one completion request, and where the
//! reply text lives in the provider's response. Everything else (model checks,
//! prompt rendering, JSON validation, error classification) is shared and lives
//! in [`crate::transformer::Transformer`].

use async_trait::async_trait;
use recast_core::{ProviderId, ResolvedConfig};

use crate::error::ProviderError;

#[async_trait]
pub trait Adapter: Send + Sync {
    /// Short-lived handle built once per call.
    type Client: Send + Sync;
    /// Provider-specific response envelope.
    type Response: Send;

    /// Which provider this adapter talks to.
    fn provider(&self) -> ProviderId;

    /// Build a client from the resolved config (explicit key, then env fallback).
    fn create_client(&self, config: &ResolvedConfig) -> Result<Self::Client, ProviderError>;

    /// Send exactly one request carrying both prompts and the numeric settings.
    async fn issue_request(
        &self,
        client: &Self::Client,
        system_prompt: &str,
        user_prompt: &str,
        config: &ResolvedConfig,
    ) -> Result<Self::Response, ProviderError>;

    /// Pull the first textual reply out of the response.
    ///
    /// `None` means the provider sent nothing usable. That is not an error.
    fn extract_text(&self, response: Self::Response) -> Option<String>;

    /// Clean up the reply text before JSON parsing.
    ///
    /// Returning `None` means "nothing usable", same as an empty reply.
    fn preprocess_text(&self, text: String) -> Option<String> {
        Some(text)
    }
}
