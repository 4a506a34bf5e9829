//! Configuration loader with layered sources
//!
//! Loads configuration from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Environment variables (APIMASK__*)
//! 2. Configuration file (TOML)
//! 3. Default values

use crate::config::types::AppConfig;
use crate::error::{ConfigError, VisibilityError};
use crate::visibility::Mask;
use config::{Config, Environment, File, FileFormat};
use std::path::Path;

/// Default configuration file paths to check (in order)
const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "apimask.toml",
    ".apimask.toml",
    "~/.config/apimask/config.toml",
    "/etc/apimask/config.toml",
];

/// Load configuration from a TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(toml_str, FileFormat::Toml))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Load configuration from files and environment
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. Start with defaults (handled by serde defaults on AppConfig)

    // 2. Add configuration file
    if let Some(path) = config_path {
        // Explicit path provided - must exist
        if !Path::new(path).exists() {
            return Err(ConfigError::Load(format!(
                "Configuration file not found: {}",
                path
            )));
        }
        builder = builder.add_source(File::new(path, FileFormat::Toml));
    } else {
        // Try default paths (first existing one wins)
        for path in DEFAULT_CONFIG_PATHS {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
                break;
            }
        }
    }

    // 3. Add environment variables with APIMASK prefix
    // e.g., APIMASK__LOGGING__LEVEL=debug
    // Double underscore (__) maps to nested keys (logging.level)
    builder = builder.add_source(
        Environment::with_prefix("APIMASK")
            .separator("__")
            .try_parsing(true),
    );

    // Build and deserialize
    let config = builder
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    // Validate the configuration
    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate configuration values
///
/// Every configured mask is trial-compiled here so a bad mask fails the
/// process at startup instead of producing a silently wrong catalogue
/// later. The engine itself still compiles lazily.
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    validate_masks(&config.catalogue.visible_items, "catalogue.visible_items")?;
    validate_masks(&config.catalogue.hidden_items, "catalogue.hidden_items")?;
    Ok(())
}

/// Validate that all masks compile
fn validate_masks(masks: &[String], field_path: &str) -> Result<(), ConfigError> {
    for mask in masks {
        if let Err(VisibilityError::InvalidPattern { pattern, reason }) =
            Mask::parse(mask).validate()
        {
            return Err(ConfigError::InvalidPattern {
                pattern,
                reason: format!("in {}: {}", field_path, reason),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_from_str_basic() {
        let toml = r#"
[catalogue]
visible_items = ["User.*", "WeatherForecast.Get*"]
hidden_items = ["Admin"]

[logging]
level = "debug"
"#;

        let config = load_config_from_str(toml).unwrap();
        assert_eq!(
            config.catalogue.visible_items,
            vec!["User.*", "WeatherForecast.Get*"]
        );
        assert_eq!(config.catalogue.hidden_items, vec!["Admin"]);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_config_from_str_empty_sections() {
        let config = load_config_from_str("").unwrap();
        assert!(config.catalogue.visible_items.is_empty());
        assert!(config.catalogue.hidden_items.is_empty());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_explicit_file_errors() {
        let result = load_config(Some("/nonexistent/apimask.toml"));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
