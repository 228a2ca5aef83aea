//! Provider registry — static specs for the supported providers and their models.
//!
//! Each `ProviderSpec` describes how to reach one provider: its display name,
//! the environment variable holding its API key, its default API base, and the
//! exact model identifiers it accepts. No model may appear under two providers;
//! this is checked when the crate compiles.

use recast_core::ProviderId;

// ─────────────────────────────────────────────
// ProviderSpec — static metadata for one provider
// ─────────────────────────────────────────────

/// Static specification describing one LLM provider.
#[derive(Clone, Debug)]
pub struct ProviderSpec {
    pub id: ProviderId,
    /// Human-readable name for logs. E.g. `"OpenAI"`.
    pub display_name: &'static str,
    /// Environment variable read when no explicit API key is given.
    pub env_key: &'static str,
    /// Base URL used unless the caller overrides it.
    pub default_api_base: &'static str,
    /// Exact model identifiers this provider serves.
    pub models: &'static [&'static str],
}

impl ProviderSpec {
    pub fn supports(&self, model: &str) -> bool {
        self.models.contains(&model)
    }
}

// ─────────────────────────────────────────────
// Model identifiers
// ─────────────────────────────────────────────

pub const GEMINI_2_0_FLASH: &str = "gemini-2.0-flash";
pub const GEMINI_2_0_FLASH_LITE: &str = "gemini-2.0-flash-lite";

pub const GPT_4_1: &str = "gpt-4.1";
pub const GPT_4_1_MINI: &str = "gpt-4.1-mini";
pub const GPT_4_1_NANO: &str = "gpt-4.1-nano";
pub const GPT_4_O: &str = "gpt-4o";
pub const GPT_4_O_MINI: &str = "gpt-4o-mini";

pub const CLAUDE_3_7_SONNET: &str = "claude-3-7-sonnet-latest";
pub const CLAUDE_3_5_HAIKU: &str = "claude-3-5-haiku-latest";

// ─────────────────────────────────────────────
// All providers, in ProviderId::ALL order
// ─────────────────────────────────────────────

const SPECS: &[ProviderSpec] = &[
    ProviderSpec {
        id: ProviderId::Google,
        display_name: "Google",
        env_key: "GOOGLE_AI_API_KEY",
        default_api_base: "https://generativelanguage.googleapis.com/v1beta",
        models: &[GEMINI_2_0_FLASH, GEMINI_2_0_FLASH_LITE],
    },
    ProviderSpec {
        id: ProviderId::OpenAi,
        display_name: "OpenAI",
        env_key: "OPENAI_API_KEY",
        default_api_base: "https://api.openai.com/v1",
        models: &[GPT_4_1, GPT_4_1_MINI, GPT_4_1_NANO, GPT_4_O, GPT_4_O_MINI],
    },
    ProviderSpec {
        id: ProviderId::Anthropics,
        display_name: "Anthropic",
        env_key: "ANTHROPIC_API_KEY",
        default_api_base: "https://api.anthropic.com/v1",
        models: &[CLAUDE_3_7_SONNET, CLAUDE_3_5_HAIKU],
    },
];

const _: () = assert!(models_are_disjoint(SPECS), "a model is registered under two providers");

/// Complete list of supported provider specifications.
pub static PROVIDERS: &[ProviderSpec] = SPECS;

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn models_are_disjoint(specs: &[ProviderSpec]) -> bool {
    let mut p = 0;
    while p < specs.len() {
        let mut q = p + 1;
        while q < specs.len() {
            let mut i = 0;
            while i < specs[p].models.len() {
                let mut j = 0;
                while j < specs[q].models.len() {
                    if str_eq(specs[p].models[i], specs[q].models[j]) {
                        return false;
                    }
                    j += 1;
                }
                i += 1;
            }
            q += 1;
        }
        p += 1;
    }
    true
}

// ─────────────────────────────────────────────
// Lookup functions
// ─────────────────────────────────────────────

/// The spec for a provider. Every `ProviderId` has exactly one.
pub fn find_by_id(id: ProviderId) -> &'static ProviderSpec {
    match id {
        ProviderId::Google => &PROVIDERS[0],
        ProviderId::OpenAi => &PROVIDERS[1],
        ProviderId::Anthropics => &PROVIDERS[2],
    }
}

/// Whether `model` belongs to `provider`'s registry.
pub fn supports(provider: ProviderId, model: &str) -> bool {
    find_by_id(provider).supports(model)
}

/// Find the provider serving `model`, if any.
pub fn provider_for_model(model: &str) -> Option<ProviderId> {
    PROVIDERS
        .iter()
        .find(|spec| spec.supports(model))
        .map(|spec| spec.id)
}

/// Whether any provider serves `model`.
pub fn is_supported_model(model: &str) -> bool {
    provider_for_model(model).is_some()
}

/// Every registered model, in registry order.
pub fn all_models() -> impl Iterator<Item = &'static str> {
    PROVIDERS.iter().flat_map(|spec| spec.models.iter().copied())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
