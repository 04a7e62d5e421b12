//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable consulted when no API key is present in the config file.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub feedback: FeedbackConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Credential for the text-generation service. Resolved once at startup;
    /// absence disables the AI-feedback path but not keyword matching.
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Optional stop-word list override, one lowercase word per line.
    pub stop_words_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feedback: FeedbackConfig {
                api_key: None,
                endpoint: DEFAULT_ENDPOINT.to_string(),
                model: DEFAULT_MODEL.to_string(),
                timeout_secs: 120,
            },
            analysis: AnalysisConfig {
                stop_words_path: None,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| {
                ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e))
            })?
        } else {
            let config = Self::default();
            config.save()?;
            config
        };

        config.resolve_credentials();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    /// Fill in the API key from the environment when the config file has none.
    pub fn resolve_credentials(&mut self) {
        if self.feedback.api_key.is_none() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                if !key.trim().is_empty() {
                    self.feedback.api_key = Some(key);
                }
            }
        }
    }

    pub fn has_feedback_credential(&self) -> bool {
        self.feedback
            .api_key
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.feedback.api_key.is_none());
        assert!(!config.has_feedback_credential());
        assert!(config.feedback.endpoint.starts_with("https://"));
        assert_eq!(config.feedback.model, "gemini-1.5-flash-latest");
        assert!(matches!(config.output.format, OutputFormat::Console));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.feedback.endpoint, config.feedback.endpoint);
        assert_eq!(parsed.feedback.timeout_secs, config.feedback.timeout_secs);
    }

    #[test]
    fn test_blank_key_is_not_a_credential() {
        let mut config = Config::default();
        config.feedback.api_key = Some("   ".to_string());
        assert!(!config.has_feedback_credential());

        config.feedback.api_key = Some("test-key".to_string());
        assert!(config.has_feedback_credential());
    }
}
