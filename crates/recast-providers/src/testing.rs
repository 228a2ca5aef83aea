//! Fixtures shared by the provider tests.

use recast_core::{LlmConfig, ProviderId, ResolvedConfig};

pub const TEST_API_KEY: &str = "fake-api-key";

pub const TEST_SOURCE: &str = "function sumEvens(arr){ let t=0; for(let i=0;i<arr.length;i++){ if(arr[i]%2===0) t+=arr[i]; } return t; }";

pub const TEST_PROMPT: &str = "Refactor this to use array methods (filter + reduce)";

pub const TEST_TRANSFORMATION: &str =
    "function sumEvens(arr) {\n  return arr.filter((n) => n % 2 === 0).reduce((t, n) => t + n, 0);\n}";

/// Defaults-only settings pointed at `api_base`, isolated from the process environment.
pub fn resolved(provider: ProviderId, model: &str, api_base: &str) -> ResolvedConfig {
    LlmConfig::for_model(model)
        .with_api_key(TEST_API_KEY)
        .with_api_base(api_base)
        .resolve_with(provider, |_| None)
}

/// `{"code": ...}` reply text for `code`.
pub fn code_reply(code: &str) -> String {
    serde_json::json!({ "code": code }).to_string()
}
