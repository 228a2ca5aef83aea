//! OpenAI adapter — `POST /chat/completions`.
//!
//! The system prompt travels as a `system` message. Reply text is
//! `choices[0].message.content`, used as-is.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use recast_core::{ProviderId, ResolvedConfig};

use crate::error::ProviderError;
use crate::http::HttpClient;
use crate::registry::find_by_id;
use crate::traits::Adapter;

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Subset of the chat completions response Recast reads.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Talks to OpenAI's chat completions API.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenAiAdapter;

#[async_trait]
impl Adapter for OpenAiAdapter {
    type Client = HttpClient;
    type Response = ChatCompletionResponse;

    fn provider(&self) -> ProviderId {
        ProviderId::OpenAi
    }

    fn create_client(&self, config: &ResolvedConfig) -> Result<HttpClient, ProviderError> {
        HttpClient::build(find_by_id(ProviderId::OpenAi), config)
    }

    async fn issue_request(
        &self,
        client: &HttpClient,
        system_prompt: &str,
        user_prompt: &str,
        config: &ResolvedConfig,
    ) -> Result<ChatCompletionResponse, ProviderError> {
        let body = ChatCompletionRequest {
            model: &config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        };

        let request = client
            .post("chat/completions")
            .bearer_auth(client.api_key())
            .json(&body);
        client.send_json(request).await
    }

    fn extract_text(&self, response: ChatCompletionResponse) -> Option<String> {
        response.choices.into_iter().next()?.message.content
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

    fn response(json: serde_json::Value) -> ChatCompletionResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_extract_first_choice() {
        let resp = response(serde_json::json!({
            "choices": [
                { "message": { "content": "first" } },
                { "message": { "content": "second" } }
            ]
        }));
        assert_eq!(OpenAiAdapter.extract_text(resp).as_deref(), Some("first"));
    }

    #[test]
    fn test_extract_null_content() {
        let resp = response(serde_json::json!({
            "choices": [{ "message": { "content": null, "tool_calls": [] } }]
        }));
        assert!(OpenAiAdapter.extract_text(resp).is_none());
    }

    #[test]
    fn test_extract_no_choices() {
        assert!(OpenAiAdapter.extract_text(response(serde_json::json!({}))).is_none());
    }

    #[test]
    fn test_text_is_not_preprocessed() {
        let fenced = "```json\n{}\n```".to_string();
        assert_eq!(OpenAiAdapter.preprocess_text(fenced.clone()), Some(fenced));
    }

    #[tokio::test]
    async fn test_request_shape() {
        let mock_server = MockServer::start().await;
        let user_prompt = build_user_prompt("let a = 1;", "rename a");

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", format!("Bearer {TEST_API_KEY}").as_str()))
            .and(body_json(serde_json::json!({
                "model": "gpt-4.1-nano",
                "messages": [
                    { "role": "system", "content": SYSTEM_PROMPT },
                    { "role": "user", "content": user_prompt }
                ],
                "temperature": 0.0,
                "max_tokens": 1024
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "chatcmpl-test",
                "choices": [{ "message": { "content": "{\"code\": \"let b = 1;\"}" } }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = resolved(ProviderId::OpenAi, "gpt-4.1-nano", &mock_server.uri());
        let client = OpenAiAdapter.create_client(&config).unwrap();
        let resp = OpenAiAdapter
            .issue_request(&client, SYSTEM_PROMPT, &user_prompt, &config)
            .await
            .unwrap();

        assert_eq!(
            OpenAiAdapter.extract_text(resp).as_deref(),
            Some("{\"code\": \"let b = 1;\"}")
        );
    }
}
