//! Google Gemini adapter — `POST /models/{model}:generateContent`.
//!
//! Gemini tends to wrap JSON in a ```` ```json ```` fence, so replies are only
//! accepted when fenced; the fence is stripped before parsing and unfenced
//! replies count as "no usable text".

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use recast_core::{ProviderId, ResolvedConfig};

use crate::error::ProviderError;
use crate::http::HttpClient;
use crate::registry::find_by_id;
use crate::traits::Adapter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    system_instruction: SystemInstruction<'a>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct SystemInstruction<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

/// Subset of the generateContent response Recast reads.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Strip a ```` ```json ... ``` ```` wrapper spanning the whole text.
///
/// Returns the trimmed inner text, or `None` when `text` is not exactly one fenced block.
pub fn strip_json_fence(text: &str) -> Option<&str> {
    let inner = text.strip_prefix("```json")?.strip_suffix("```")?;
    Some(inner.trim())
}

/// Talks to the Gemini API.
#[derive(Clone, Copy, Debug, Default)]
pub struct GoogleAdapter;

#[async_trait]
impl Adapter for GoogleAdapter {
    type Client = HttpClient;
    type Response = GenerateContentResponse;

    fn provider(&self) -> ProviderId {
        ProviderId::Google
    }

    fn create_client(&self, config: &ResolvedConfig) -> Result<HttpClient, ProviderError> {
        HttpClient::build(find_by_id(ProviderId::Google), config)
    }

    async fn issue_request(
        &self,
        client: &HttpClient,
        system_prompt: &str,
        user_prompt: &str,
        config: &ResolvedConfig,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let body = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: user_prompt }],
            }],
            system_instruction: SystemInstruction {
                parts: [Part {
                    text: system_prompt,
                }],
            },
            generation_config: GenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_tokens,
            },
        };

        let request = client
            .post(&format!("models/{}:generateContent", config.model))
            .header("x-goog-api-key", client.api_key())
            .json(&body);
        client.send_json(request).await
    }

    /// Concatenated text parts of the first candidate.
    fn extract_text(&self, response: GenerateContentResponse) -> Option<String> {
        let content = response.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn preprocess_text(&self, text: String) -> Option<String> {
        strip_json_fence(&text).map(String::from)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::{build_user_prompt, SYSTEM_PROMPT};
    use crate::testing::{resolved, TEST_API_KEY};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn response(json: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_strip_fence() {
        assert_eq!(strip_json_fence("```json\n{\"code\": \"x\"}\n```"), Some("{\"code\": \"x\"}"));
        assert_eq!(strip_json_fence("```json{}```"), Some("{}"));
    }

    #[test]
    fn test_strip_fence_requires_whole_text() {
        assert_eq!(strip_json_fence("{\"code\": \"x\"}"), None);
        assert_eq!(strip_json_fence("not markdown json"), None);
        assert_eq!(strip_json_fence("Here:\n```json\n{}\n```"), None);
        assert_eq!(strip_json_fence("```json\n{}\n```\n"), None);
        assert_eq!(strip_json_fence("```\n{}\n```"), None);
    }

    #[test]
    fn test_preprocess_unfenced_is_none() {
        assert!(GoogleAdapter.preprocess_text("plain".into()).is_none());
        assert_eq!(
            GoogleAdapter.preprocess_text("```json\ninvalid json\n```".into()).as_deref(),
            Some("invalid json")
        );
    }

    #[test]
    fn test_extract_joins_parts() {
        let resp = response(serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "```json\n{" }, { "text": "}\n```" }] },
                "finishReason": "STOP"
            }]
        }));
        assert_eq!(GoogleAdapter.extract_text(resp).as_deref(), Some("```json\n{}\n```"));
    }

    #[test]
    fn test_extract_empty() {
        assert!(GoogleAdapter.extract_text(response(serde_json::json!({}))).is_none());
        let blocked = response(serde_json::json!({ "candidates": [{ "finishReason": "SAFETY" }] }));
        assert!(GoogleAdapter.extract_text(blocked).is_none());
        let empty = response(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "" }] } }]
        }));
        assert!(GoogleAdapter.extract_text(empty).is_none());
    }

    #[tokio::test]
    async fn test_request_shape() {
        let mock_server = MockServer::start().await;
        let user_prompt = build_user_prompt("src", "do it");

        Mock::given(method("POST"))
            .and(path("/models/gemini-2.0-flash:generateContent"))
            .and(header("x-goog-api-key", TEST_API_KEY))
            .and(body_json(serde_json::json!({
                "contents": [{ "role": "user", "parts": [{ "text": user_prompt }] }],
                "systemInstruction": { "parts": [{ "text": SYSTEM_PROMPT }] },
                "generationConfig": { "temperature": 0.0, "maxOutputTokens": 1024 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = resolved(ProviderId::Google, "gemini-2.0-flash", &mock_server.uri());
        let client = GoogleAdapter.create_client(&config).unwrap();
        let resp = GoogleAdapter
            .issue_request(&client, SYSTEM_PROMPT, &user_prompt, &config)
            .await
            .unwrap();

        assert_eq!(GoogleAdapter.extract_text(resp).as_deref(), Some("ok"));
    }
}
