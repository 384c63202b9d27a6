//! Dashboard UI configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// UI settings the dashboard reads on startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    /// UI language
    #[serde(default = "default_language")]
    pub language: String,
    /// UI theme ("light", "dark" or "system")
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_language() -> String {
    "zh".to_string()
}

fn default_theme() -> String {
    "system".to_string()
}

impl UiConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self { language: default_language(), theme: default_theme() }
    }

    /// Parse configuration from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e))
    }

    /// Override the language, keeping everything else.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.language, "zh");
        assert_eq!(config.theme, "system");
    }

    #[test]
    fn test_from_json_partial() {
        let config = UiConfig::from_json(r#"{"language": "en"}"#).unwrap();
        assert_eq!(config.language, "en");
        assert_eq!(config.theme, "system");
    }

    #[test]
    fn test_from_json_ignores_unrelated_fields() {
        let config =
            UiConfig::from_json(r#"{"theme": "dark", "auto_refresh": true, "proxy": {}}"#).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.language, "zh");
    }

    #[test]
    fn test_from_json_error() {
        let err = UiConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
