//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Where the profile JSON sits in a successful response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    /// The body itself is the profile JSON
    #[default]
    Direct,
    /// The profile JSON is the text of `choices[0].message.content`
    ChatCompletion,
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// How to find the profile JSON in the response body
    #[serde(default)]
    pub response_shape: ResponseShape,

    /// Label recorded in outcome metadata
    #[serde(default = "default_model_name")]
    pub model_name: String,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model_name.trim().is_empty() {
            return Err("model_name must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            response_shape: ResponseShape::Direct,
            model_name: default_model_name(),
        }
    }
}

fn default_model_name() -> String {
    "chat-completions".to_string()
}
