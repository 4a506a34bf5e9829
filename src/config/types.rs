//! Configuration types for apimask
//!
//! This module defines the configuration structure that can be loaded from
//! TOML files and/or environment variables.

use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalogue visibility masks
    pub catalogue: CatalogueConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Catalogue visibility configuration
///
/// Both fields hold masks in `Group[.Operation]` form with optional `?`
/// and `*` wildcards, matched case-insensitively against whole names.
///
/// With `visible_items` set, only matching operations are advertised;
/// `hidden_items` removes operations from whatever the visible set would
/// otherwise be. Neither list affects whether an operation can be invoked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogueConfig {
    /// Masks selecting the operations to advertise
    pub visible_items: Vec<String>,

    /// Masks selecting the operations to hide
    pub hidden_items: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON structured output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.catalogue.visible_items.is_empty());
        assert!(config.catalogue.hidden_items.is_empty());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_deserialize_log_format() {
        let format: LogFormat = serde_json::from_str(r#""pretty""#).unwrap();
        assert_eq!(format, LogFormat::Pretty);

        let format: LogFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(format, LogFormat::Json);
    }
}
