//! Anthropic adapter — `POST /messages`.
//!
//! Anthropic takes the system prompt as a top-level `system` field and needs
//! `max_tokens` on every request. Reply text is the first content block when
//! that block is a `text` block.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use recast_core::{ProviderId, ResolvedConfig};

use crate::error::ProviderError;
use crate::http::HttpClient;
use crate::registry::find_by_id;
use crate::traits::Adapter;

/// Messages API version header value.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    system: &'a str,
    messages: [UserMessage<'a>; 1],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Subset of the messages response Recast reads.
#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Talks to Anthropic's messages API.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnthropicAdapter;

#[async_trait]
impl Adapter for AnthropicAdapter {
    type Client = HttpClient;
    type Response = MessagesResponse;

    fn provider(&self) -> ProviderId {
        ProviderId::Anthropics
    }

    fn create_client(&self, config: &ResolvedConfig) -> Result<HttpClient, ProviderError> {
        HttpClient::build(find_by_id(ProviderId::Anthropics), config)
    }

    async fn issue_request(
        &self,
        client: &HttpClient,
        system_prompt: &str,
        user_prompt: &str,
        config: &ResolvedConfig,
    ) -> Result<MessagesResponse, ProviderError> {
        let body = MessagesRequest {
            model: &config.model,
            system: system_prompt,
            messages: [UserMessage {
                role: "user",
                content: user_prompt,
            }],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        };

        let request = client
            .post("messages")
            .header("x-api-key", client.api_key())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body);
        client.send_json(request).await
    }

    fn extract_text(&self, response: MessagesResponse) -> Option<String> {
        match response.content.into_iter().next()? {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
