//! Credential environment variable table.
//!
//! Maps each LLM provider the gateway knows about to the environment
//! variable(s) that may carry its API key. Where a provider has historical
//! alias variables, the first non-empty one wins.

use crate::config::{ProviderConfig, ProvidersConfig};

/// One provider's credential lookup entry.
pub struct ProviderVar {
    /// Provider key as it appears in the gateway configuration
    pub name: &'static str,

    /// Environment variables checked in order; first non-empty wins
    pub env_vars: &'static [&'static str],

    slot: fn(&mut ProvidersConfig) -> &mut Option<ProviderConfig>,
}

impl ProviderVar {
    /// Place a credential into this provider's slot of the config blob.
    pub fn fill(&self, providers: &mut ProvidersConfig, api_key: String) {
        *(self.slot)(providers) = Some(ProviderConfig::new(api_key));
    }
}

/// All providers the launcher knows how to derive credentials for.
pub const PROVIDERS: &[ProviderVar] = &[
    ProviderVar {
        name: "groq",
        env_vars: &["GROQ_API_KEY", "LITELLM_GROQ_API_KEY"],
        slot: |p| &mut p.groq,
    },
    ProviderVar {
        name: "openrouter",
        env_vars: &["OPENROUTER_API_KEY"],
        slot: |p| &mut p.openrouter,
    },
    ProviderVar {
        name: "openai",
        env_vars: &["OPENAI_API_KEY"],
        slot: |p| &mut p.openai,
    },
    ProviderVar {
        name: "anthropic",
        env_vars: &["ANTHROPIC_API_KEY"],
        slot: |p| &mut p.anthropic,
    },
    ProviderVar {
        name: "deepseek",
        env_vars: &["DEEPSEEK_API_KEY"],
        slot: |p| &mut p.deepseek,
    },
    ProviderVar {
        name: "gemini",
        env_vars: &["GEMINI_API_KEY"],
        slot: |p| &mut p.gemini,
    },
    ProviderVar {
        name: "zhipu",
        env_vars: &["ZHIPU_API_KEY", "ZHIPUAI_API_KEY"],
        slot: |p| &mut p.zhipu,
    },
];
