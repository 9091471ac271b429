//! The slice of the gateway configuration the launcher can synthesize.
//!
//! The gateway owns the full configuration schema; the launcher only ever
//! produces the `providers` section, one entry per credential found in the
//! environment. Field order here is the serialization order, so the emitted
//! JSON is deterministic.

use serde::{Deserialize, Serialize};

/// Top-level configuration blob passed to the gateway via `NANOBOT_CONFIG`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GatewayConfig {
    /// LLM provider credentials, keyed by provider name
    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// Per-provider credential entries. Absent providers are omitted from the
/// serialized form entirely, so a groq-only environment yields exactly
/// `{"providers":{"groq":{"api_key":"..."}}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProvidersConfig {
    /// Groq credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groq: Option<ProviderConfig>,

    /// OpenRouter credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openrouter: Option<ProviderConfig>,

    /// OpenAI credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai: Option<ProviderConfig>,

    /// Anthropic credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anthropic: Option<ProviderConfig>,

    /// DeepSeek credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deepseek: Option<ProviderConfig>,

    /// Gemini credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini: Option<ProviderConfig>,

    /// Zhipu credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zhipu: Option<ProviderConfig>,
}

impl ProvidersConfig {
    /// True when no provider entry is present.
    pub const fn is_empty(&self) -> bool {
        self.groq.is_none()
            && self.openrouter.is_none()
            && self.openai.is_none()
            && self.anthropic.is_none()
            && self.deepseek.is_none()
            && self.gemini.is_none()
            && self.zhipu.is_none()
    }
}

/// Settings for a single LLM provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProviderConfig {
    /// API key, passed through verbatim
    pub api_key: String,
}

impl ProviderConfig {
    /// Build an entry from a raw key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groq_only_serialization_is_minimal() {
        let config = GatewayConfig {
            providers: ProvidersConfig {
                groq: Some(ProviderConfig::new("gsk_test-key_123")),
                ..Default::default()
            },
        };

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"providers":{"groq":{"api_key":"gsk_test-key_123"}}}"#);
    }

    #[test]
    fn test_empty_providers() {
        let config = GatewayConfig::default();
        assert!(config.providers.is_empty());
        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            r#"{"providers":{}}"#
        );
    }

    #[test]
    fn test_provider_order_is_stable() {
        let config = GatewayConfig {
            providers: ProvidersConfig {
                anthropic: Some(ProviderConfig::new("a")),
                groq: Some(ProviderConfig::new("g")),
                openai: Some(ProviderConfig::new("o")),
                ..Default::default()
            },
        };

        let json = serde_json::to_string(&config).unwrap();
        let groq_pos = json.find("groq").unwrap();
        let openai_pos = json.find("openai").unwrap();
        let anthropic_pos = json.find("anthropic").unwrap();
        assert!(groq_pos < openai_pos);
        assert!(openai_pos < anthropic_pos);
    }

    #[test]
    fn test_deserialize_round_trip() {
        let json = r#"{"providers":{"deepseek":{"api_key":"sk-abc_DEF-123"}}}"#;
        let config: GatewayConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.providers.deepseek.unwrap().api_key,
            "sk-abc_DEF-123"
        );
    }
}
