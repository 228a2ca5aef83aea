//! LLM provider layer for Recast.
//!
//! Talks to each vendor over plain HTTP (no vendor SDKs).
//!
//! # Architecture
//!
//! - [`traits::Adapter`]: the per-provider capability set
//! - [`transformer::Transformer`]: the shared algorithm driving an adapter
//! - [`registry`]: static specs for the supported providers and their models
//! - [`dispatch::transform`]: picks the provider for a model and runs it

pub mod anthropic;
pub mod dispatch;
pub mod error;
pub mod google;
pub mod http;
pub mod openai;
pub mod prompts;
pub mod registry;
pub mod schema;
pub mod traits;
pub mod transformer;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for convenience
pub use anthropic::AnthropicAdapter;
pub use dispatch::{select_provider, transform, transform_file, transform_with};
pub use error::{ProviderError, ResponseError};
pub use google::GoogleAdapter;
pub use openai::OpenAiAdapter;
pub use registry::{ProviderSpec, PROVIDERS};
pub use schema::{SchemaError, TransformResponse};
pub use traits::Adapter;
pub use transformer::Transformer;
