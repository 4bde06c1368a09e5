//! Configuration for the analysis engine

use serde::{Deserialize, Serialize};

/// Which analysis path the generator takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisCapability {
    /// Prompts are sent to the configured language model
    LanguageModel,

    /// Fixed template text, no network
    Fallback,
}

/// Language-model settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// API credential; absent or empty selects the fallback path
    pub api_key: Option<String>,

    /// Base URL of an OpenAI-compatible API
    pub base_url: String,

    /// Model name sent with every request
    pub model: String,

    /// Token budget for comparison analyses
    pub comparison_max_tokens: u32,

    /// Token budget for era adjustments
    pub era_max_tokens: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4".to_string(),
            comparison_max_tokens: 1000,
            era_max_tokens: 500,
            timeout_secs: 120,
        }
    }
}

impl AnalysisConfig {
    /// Capability implied by the credential
    pub fn capability(&self) -> AnalysisCapability {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => AnalysisCapability::LanguageModel,
            _ => AnalysisCapability::Fallback,
        }
    }

    /// Validate token budgets and endpoint
    pub fn validate(&self) -> Result<(), String> {
        if self.comparison_max_tokens == 0 || self.era_max_tokens == 0 {
            return Err("token budgets must be greater than zero".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model name must not be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!("invalid base url: {}", self.base_url));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_follows_credential() {
        let mut config = AnalysisConfig::default();
        assert_eq!(config.capability(), AnalysisCapability::Fallback);

        config.api_key = Some("   ".to_string());
        assert_eq!(config.capability(), AnalysisCapability::Fallback);

        config.api_key = Some("sk-test".to_string());
        assert_eq!(config.capability(), AnalysisCapability::LanguageModel);
    }

    #[test]
    fn test_validate() {
        assert!(AnalysisConfig::default().validate().is_ok());

        let config = AnalysisConfig { era_max_tokens: 0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = AnalysisConfig { base_url: "localhost:1234".to_string(), ..Default::default() };
        assert!(config.validate().is_err());
    }
}
