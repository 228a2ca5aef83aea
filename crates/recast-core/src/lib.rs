//! Core types, error taxonomy, and configuration for Recast.
//!
//! - [`types`] — `ProviderId`, per-call `LlmConfig`, and default application
//! - [`error`] — `TransformError` and its `ErrorKind`
//! - [`config`] — `~/.recast/config.json` schema and loader

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use error::{BoxError, ErrorKind, TransformError, TransformResult};
pub use types::{LlmConfig, ProviderId, ResolvedConfig};
