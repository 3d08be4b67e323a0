// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error types for the Quill editor assistant core.
//!
//! This module provides strongly-typed errors for different parts of the crate,
//! using `thiserror` for ergonomic error definitions and `anyhow` for error
//! propagation at the application boundary.

use thiserror::Error;

/// Errors that can occur while expanding template variables.
///
/// Unknown variable names are deliberately *not* an error: the engine leaves
/// those placeholders untouched. An error here means a recognized accessor was
/// invoked in a context where it cannot produce a value, which is a caller bug
/// and propagates out of the whole expansion.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("No active file open for variable: {0}")]
    NoActiveFile(String),

    #[error("Variable '{name}' failed: {message}")]
    AccessorFailed { name: String, message: String },
}

impl TemplateError {
    /// Create an accessor failure for a custom registered variable.
    pub fn accessor(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AccessorFailed {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Errors that can occur during tool execution.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Failed to serialize tool result: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for ToolError {
    fn from(err: reqwest::Error) -> Self {
        Self::NetworkError(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config format: {0}")]
    InvalidFormat(String),

    #[error("IO error reading config: {0}")]
    IoError(String),

    #[error("YAML parsing error: {0}")]
    YamlError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::YamlError(err.to_string())
    }
}

/// Result type alias using anyhow for flexible error handling.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_error_display() {
        let err = TemplateError::NoActiveFile("fileBasename".to_string());
        assert!(format!("{err}").contains("fileBasename"));
    }

    #[test]
    fn test_template_error_accessor() {
        let err = TemplateError::accessor("gitBranch", "not a repository");
        match err {
            TemplateError::AccessorFailed { name, message } => {
                assert_eq!(name, "gitBranch");
                assert_eq!(message, "not a repository");
            }
            _ => panic!("Expected AccessorFailed"),
        }
    }

    #[test]
    fn test_config_error_from_json() {
        let result: std::result::Result<serde_json::Value, _> = serde_json::from_str("not json");
        let config_err: ConfigError = result.unwrap_err().into();
        assert!(matches!(config_err, ConfigError::JsonError(_)));
    }

    #[test]
    fn test_config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_tool_error_display() {
        let err = ToolError::NotFound("get_current_weather".to_string());
        assert_eq!(format!("{err}"), "Tool not found: get_current_weather");
    }
}
