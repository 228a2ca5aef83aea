//! The shared transformation algorithm, parameterized over an [`Adapter`].
//!
//! One call runs: model check → client → request → text extraction → JSON
//! parse → schema check. The first failing step decides the [`ErrorKind`].
//! Provider silence (no text, an unfenced Gemini reply, an empty or missing
//! `code`) is not a failure and yields the source unchanged.

use tracing::{debug, warn};

use recast_core::{ErrorKind, ResolvedConfig, TransformError, TransformResult};

use crate::error::ResponseError;
use crate::prompts::{build_user_prompt, SYSTEM_PROMPT};
use crate::registry;
use crate::schema::{self, SchemaError};
use crate::traits::Adapter;

/// Runs transformations through one provider adapter.
#[derive(Clone, Debug, Default)]
pub struct Transformer<A> {
    adapter: A,
}

impl<A: Adapter> Transformer<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Apply `instruction` to `source` using `config.model`.
    pub async fn run(
        &self,
        source: &str,
        instruction: &str,
        config: &ResolvedConfig,
    ) -> TransformResult<String> {
        let provider = self.adapter.provider();

        if !registry::supports(provider, &config.model) {
            warn!(provider = %provider, model = %config.model, "Model not served by provider");
            return Err(TransformError::new(provider, ErrorKind::InvalidModel));
        }

        let client = self
            .adapter
            .create_client(config)
            .map_err(|e| TransformError::with_cause(provider, ErrorKind::ClientConstructionFailed, e))?;

        let user_prompt = build_user_prompt(source, instruction);
        debug!(
            provider = %provider,
            model = %config.model,
            temperature = config.temperature,
            max_tokens = config.max_tokens,
            "Requesting transformation"
        );

        let response = self
            .adapter
            .issue_request(&client, SYSTEM_PROMPT, &user_prompt, config)
            .await
            .map_err(|e| TransformError::with_cause(provider, ErrorKind::CompletionFailed, e))?;

        let text = match self
            .adapter
            .extract_text(response)
            .and_then(|text| self.adapter.preprocess_text(text))
            .filter(|text| !text.is_empty())
        {
            Some(text) => text,
            None => {
                warn!(provider = %provider, "No usable text in reply, returning source unchanged");
                return Ok(source.to_string());
            }
        };

        match parse_reply(&text) {
            Ok(code) if code.is_empty() => {
                warn!(provider = %provider, "Empty code in reply, returning source unchanged");
                Ok(source.to_string())
            }
            Ok(code) => {
                debug!(provider = %provider, len = code.len(), "Transformation succeeded");
                Ok(code)
            }
            Err(ResponseError::Schema(SchemaError::MissingCode)) => {
                warn!(provider = %provider, "Reply has no code field, returning source unchanged");
                Ok(source.to_string())
            }
            Err(e) => {
                warn!(provider = %provider, error = %e, "Unusable reply");
                Err(TransformError::with_cause(provider, ErrorKind::ResponseParseFailed, e))
            }
        }
    }
}

/// Parse the reply text and pull out `code`.
fn parse_reply(text: &str) -> Result<String, ResponseError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    Ok(schema::validate(&value)?.code)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
