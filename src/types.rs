// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Core types for the Quill editor assistant.
//!
//! This module defines the data structures shared between the tool registry
//! and its callers: tool definitions and the OpenAI function-calling
//! projection used to advertise tools to the chat API.

use serde::{Deserialize, Serialize};

// ============================================================================
// Tool Definitions
// ============================================================================

/// Definition of a tool that can be called by the AI model.
///
/// The `parameters` value is an opaque JSON Schema. The registry never
/// validates it; it is carried through to the API advertisement byte-for-byte
/// as registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    /// Create a new tool definition with an empty object schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    /// Set the parameter schema for this tool.
    pub fn with_parameters(mut self, parameters: serde_json::Value) -> Self {
        self.parameters = parameters;
        self
    }
}

// ============================================================================
// OpenAI Advertisement Projection
// ============================================================================

/// A tool entry in the OpenAI chat-completions `tools` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiTool {
    /// Always `"function"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub function: OpenAiFunction,
}

/// The function payload of an [`OpenAiTool`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiFunction {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

impl From<&ToolDefinition> for OpenAiTool {
    fn from(def: &ToolDefinition) -> Self {
        Self {
            kind: "function".to_string(),
            function: OpenAiFunction {
                name: def.name.clone(),
                description: def.description.clone(),
                parameters: def.parameters.clone(),
            },
        }
    }
}

impl From<ToolDefinition> for OpenAiTool {
    fn from(def: ToolDefinition) -> Self {
        Self {
            kind: "function".to_string(),
            function: OpenAiFunction {
                name: def.name,
                description: def.description,
                parameters: def.parameters,
            },
        }
    }
}
