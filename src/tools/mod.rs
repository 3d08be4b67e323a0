// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Tool system for Quill.
//!
//! Infrastructure for defining and executing the tools advertised to the
//! chat API. The model requests a tool by name with JSON arguments; the
//! registry looks it up, runs it, and hands back a serialized payload, or
//! `None` when the tool is missing or failed, which the caller reports as
//! "no output" rather than crashing the conversation.
//!
//! # Architecture
//!
//! - [`ToolHandler`] trait - core abstraction for tool implementations
//! - [`ToolRegistry`] - maps tool names to handlers, dispatches calls
//! - Individual handlers in the [`handlers`] module
//!
//! # Example
//!
//! ```rust,ignore
//! use quill::tools::ToolRegistry;
//!
//! let registry = ToolRegistry::with_defaults();
//! let payload = registry
//!     .execute_tool("get_current_weather", serde_json::json!({"city": "Osaka"}))
//!     .await;
//! ```

pub mod handlers;
pub mod registry;

pub use handlers::*;
pub use registry::{DispatchOutcome, ToolHandler, ToolRegistry, ToolRegistryBuilder};

use crate::error::ToolError;
use serde::Deserialize;

/// Parse JSON arguments into a typed struct.
///
/// This is a helper function for tool handlers to deserialize their input.
pub fn parse_arguments<T>(arguments: &serde_json::Value) -> Result<T, ToolError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_value(arguments.clone())
        .map_err(|err| ToolError::InvalidInput(format!("Failed to parse arguments: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        #[derive(Deserialize)]
        struct TestArgs {
            city: String,
        }

        let value = serde_json::json!({"city": "Osaka"});
        let result: Result<TestArgs, _> = parse_arguments(&value);
        assert_eq!(result.unwrap().city, "Osaka");
    }

    #[test]
    fn test_parse_arguments_invalid() {
        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct TestArgs {
            required_field: String,
        }

        let value = serde_json::json!({"wrong_field": "value"});
        let result: Result<TestArgs, _> = parse_arguments(&value);
        assert!(matches!(result.unwrap_err(), ToolError::InvalidInput(_)));
    }
}
