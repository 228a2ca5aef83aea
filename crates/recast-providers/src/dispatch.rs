//! Public entry points: pick a provider for the requested model and run it.

use std::path::Path;

use tracing::{debug, info};

use recast_core::{LlmConfig, ProviderId, TransformError, TransformResult};

use crate::anthropic::AnthropicAdapter;
use crate::google::GoogleAdapter;
use crate::openai::OpenAiAdapter;
use crate::registry;
use crate::transformer::Transformer;

/// The provider a call would go to: the explicit one, else the registry owner of the model.
///
/// `None` when the model is not registered anywhere.
pub fn select_provider(config: &LlmConfig) -> Option<ProviderId> {
    let owner = registry::provider_for_model(&config.model)?;
    Some(config.provider.unwrap_or(owner))
}

/// Apply `instruction` to `source` with the model named in `config`.
///
/// Unknown models are a no-op: `source` comes back unchanged and no request is made.
/// An explicit `config.provider` that does not serve the model fails with
/// [`recast_core::ErrorKind::InvalidModel`].
pub async fn transform(
    source: &str,
    instruction: &str,
    config: &LlmConfig,
) -> TransformResult<String> {
    transform_with(source, instruction, config, |key| std::env::var(key).ok()).await
}

/// Same as [`transform`], reading setting overrides through `env` instead of the process environment.
pub async fn transform_with<F>(
    source: &str,
    instruction: &str,
    config: &LlmConfig,
    env: F,
) -> TransformResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(provider) = select_provider(config) else {
        info!(model = %config.model, "Unknown model, returning source unchanged");
        return Ok(source.to_string());
    };

    let resolved = config.resolve_with(provider, env);
    debug!(provider = %provider, model = %resolved.model, "Dispatching transformation");

    match provider {
        ProviderId::Google => Transformer::new(GoogleAdapter).run(source, instruction, &resolved).await,
        ProviderId::OpenAi => Transformer::new(OpenAiAdapter).run(source, instruction, &resolved).await,
        ProviderId::Anthropics => {
            Transformer::new(AnthropicAdapter)
                .run(source, instruction, &resolved)
                .await
        }
    }
}

/// Read `path` and transform its contents. Invalid UTF-8 is replaced, not rejected.
pub async fn transform_file(
    path: impl AsRef<Path>,
    instruction: &str,
    config: &LlmConfig,
) -> TransformResult<String> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(TransformError::file_read)?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read source file");

    let source = String::from_utf8_lossy(&bytes);
    transform(&source, instruction, config).await
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
