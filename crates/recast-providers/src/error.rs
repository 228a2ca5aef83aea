//! Errors raised inside a provider adapter or while reading a model reply.
//!
//! These never reach the caller directly: the transformer wraps them as the
//! cause of a [`recast_core::TransformError`]. Each renders as `"<Kind>: <detail>"`.

use thiserror::Error;

use crate::schema::SchemaError;

/// Failure while building a client or talking to the provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No explicit key and the provider's environment variable is unset.
    #[error("MissingApiKeyError: no API key given and {env_key} is not set")]
    MissingApiKey { env_key: &'static str },

    /// Connection, TLS, timeout, or client-builder failure.
    #[error("HttpError: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("ApiError: {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The provider's response body did not have the expected envelope.
    #[error("DecodeError: {0}")]
    Decode(String),

    /// Anything else, for adapters outside this crate.
    #[error("Error: {0}")]
    Other(String),
}

impl ProviderError {
    pub fn other(message: impl Into<String>) -> Self {
        ProviderError::Other(message.into())
    }
}

/// The model replied, but the text was not usable JSON.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("SyntaxError: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("SchemaError: {0}")]
    Schema(#[from] SchemaError),
}
