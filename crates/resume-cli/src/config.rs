//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use resume_extractor::ExtractorConfig;
use resume_llm::EndpointConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Extraction endpoint
    #[serde(default)]
    pub endpoint: EndpointSection,

    /// Pipeline settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Endpoint values from the config file; flags and env vars take precedence.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointSection {
    /// Full URL of the extraction endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Credential sent in the `api-key` header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for EndpointSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointSection")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".resume-extract").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file at the default location yields the default config; a
    /// missing file that was asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.extractor.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Combine command-line values with the config file into an endpoint.
    pub fn resolve_endpoint(
        &self,
        url: Option<String>,
        api_key: Option<String>,
    ) -> Result<EndpointConfig> {
        let url = url.or_else(|| self.endpoint.url.clone()).ok_or_else(|| {
            CliError::Config(
                "No endpoint URL configured. Use --endpoint or RESUME_EXTRACT_ENDPOINT".into(),
            )
        })?;
        let api_key = api_key
            .or_else(|| self.endpoint.api_key.clone())
            .ok_or_else(|| {
                CliError::Config(
                    "No API key configured. Use --api-key or RESUME_EXTRACT_API_KEY".into(),
                )
            })?;

        let endpoint = EndpointConfig::new(url, api_key);
        endpoint.validate().map_err(CliError::Config)?;
        Ok(endpoint)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_extractor::ResponseShape;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.extractor, ExtractorConfig::default());
        assert!(config.endpoint.url.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.endpoint.url = Some("https://example.com/chat".to_string());
        config.extractor.response_shape = ResponseShape::ChatCompletion;
        config.settings.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[endpoint]\nurl = \"https://example.com/chat\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.endpoint.url.as_deref(), Some("https://example.com/chat"));
        assert_eq!(config.endpoint.api_key, None);
        assert!(config.settings.color);
        assert_eq!(config.extractor.response_shape, ResponseShape::Direct);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(dir.path().join("absent.toml").as_path()));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_invalid_extractor_section_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[extractor]\nmodel_name = \"\"\n").unwrap();

        assert!(matches!(Config::load(Some(path.as_path())), Err(CliError::Config(_))));
    }

    #[test]
    fn test_flags_override_file() {
        let mut config = Config::default();
        config.endpoint.url = Some("https://file.example.com".to_string());
        config.endpoint.api_key = Some("file-key".to_string());

        let endpoint = config
            .resolve_endpoint(Some("https://flag.example.com".to_string()), None)
            .unwrap();
        assert_eq!(endpoint.url, "https://flag.example.com");
        assert_eq!(endpoint.api_key, "file-key");
    }

    #[test]
    fn test_missing_endpoint_values() {
        let config = Config::default();
        assert!(config.resolve_endpoint(None, Some("key".into())).is_err());
        assert!(config
            .resolve_endpoint(Some("https://example.com".into()), None)
            .is_err());
        assert!(config
            .resolve_endpoint(Some("https://example.com".into()), Some("  ".into()))
            .is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let section = EndpointSection {
            url: None,
            api_key: Some("super-secret".to_string()),
        };
        let debug = format!("{:?}", section);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
