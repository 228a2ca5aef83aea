//! Error taxonomy shared by every provider.
//!
//! All failures surface as one [`TransformError`] tagged with an [`ErrorKind`]
//! and, when a provider was involved, the [`ProviderId`] that ran. The display
//! form is uniform so callers can match on it without knowing the provider:
//!
//! ```text
//! Failed to get completion; cause='Error: API call failed'
//! ```

use std::error::Error as StdError;

use thiserror::Error;

use crate::types::ProviderId;

/// Boxed underlying error kept as the `source()` of a [`TransformError`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Which step of a transformation failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The model is not in the selected provider's registry.
    InvalidModel,
    /// Credentials or the HTTP client could not be set up.
    ClientConstructionFailed,
    /// The request itself failed (network, timeout, non-2xx status).
    CompletionFailed,
    /// The provider replied, but not with usable `{"code": ...}` JSON.
    ResponseParseFailed,
    /// The source file for the file-based entry point could not be read.
    FileReadFailed,
}

impl ErrorKind {
    /// Fixed step description used as the error message.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::InvalidModel => "Invalid model provided",
            ErrorKind::ClientConstructionFailed => "Failed to load client",
            ErrorKind::CompletionFailed => "Failed to get completion",
            ErrorKind::ResponseParseFailed => "Failed to parse AI transformation",
            ErrorKind::FileReadFailed => "Failed to read file",
        }
    }
}

/// A classified transformation failure.
#[derive(Debug, Error)]
#[error("{message}{}", render_cause(.cause))]
pub struct TransformError {
    provider: Option<ProviderId>,
    kind: ErrorKind,
    message: String,
    #[source]
    cause: Option<BoxError>,
}

fn render_cause(cause: &Option<BoxError>) -> String {
    match cause {
        Some(cause) => format!("; cause='{cause}'"),
        None => String::new(),
    }
}

impl TransformError {
    /// A provider-tagged error with the step's standard message and no cause.
    pub fn new(provider: ProviderId, kind: ErrorKind) -> Self {
        Self {
            provider: Some(provider),
            kind,
            message: kind.message().to_string(),
            cause: None,
        }
    }

    /// A provider-tagged error wrapping `cause`.
    pub fn with_cause<E>(provider: ProviderId, kind: ErrorKind, cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            cause: Some(cause.into()),
            ..Self::new(provider, kind)
        }
    }

    /// The file-based entry point could not read its input.
    pub fn file_read<E>(cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            provider: None,
            kind: ErrorKind::FileReadFailed,
            message: ErrorKind::FileReadFailed.message().to_string(),
            cause: Some(cause.into()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The provider that ran, if the failure happened past dispatch.
    pub fn provider(&self) -> Option<ProviderId> {
        self.provider
    }

    /// Step description without the rendered cause.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped underlying error, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

/// Result alias for transformation calls.
pub type TransformResult<T> = Result<T, TransformError>;
