//! Error types for apimask
//!
//! This module defines the error hierarchy used throughout the crate.
//! We use `thiserror` for library-style errors that are part of the API;
//! the CLI converts them to human-readable output at the boundary.

use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Visibility error: {0}")]
    Visibility(#[from] VisibilityError),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Invalid mask '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while deciding catalogue visibility
///
/// There are exactly two failure modes: a mask whose pattern cannot be
/// compiled, and a call that omits the mandatory group name. Engine
/// construction itself never fails.
#[derive(Error, Debug)]
pub enum VisibilityError {
    /// A mask's group or operation pattern could not be compiled into a
    /// matcher. Raised lazily by the first evaluation that needs the mask
    /// and never downgraded to a non-match.
    #[error("Invalid mask pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The group name is mandatory; classifying an operation without one
    /// is a caller contract violation.
    #[error("Group name must not be empty")]
    MissingGroupName,
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for visibility decisions
pub type VisibilityResult<T> = std::result::Result<T, VisibilityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_error_display() {
        let err = VisibilityError::InvalidPattern {
            pattern: "User.Get*".to_string(),
            reason: "compiled pattern too large".to_string(),
        };
        assert!(err.to_string().contains("User.Get*"));

        let err = VisibilityError::MissingGroupName;
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_config_error_wraps_into_app_error() {
        let err: AppError = ConfigError::Invalid {
            message: "bad section".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Config(_)));
    }
}
