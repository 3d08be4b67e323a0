// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Tool registry and handler trait.
//!
//! This module defines the core abstractions for the tool system:
//! - [`ToolHandler`] trait that all tools must implement
//! - [`ToolRegistry`] for managing and dispatching tool calls
//! - [`DispatchOutcome`] distinguishing completion, missing tools, and
//!   handler failures
//!
//! Dispatch is deliberately fail-soft: a missing tool or a failing handler
//! degrades to a logged `None` payload, never a panic or a propagated error.
//! The model-facing caller treats `None` as "tool could not produce output".

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "telemetry")]
use std::time::Instant;

#[cfg(feature = "telemetry")]
use tracing::{debug, info_span, Instrument};

use tracing::warn;

use crate::error::ToolError;
#[cfg(feature = "telemetry")]
use crate::telemetry::metrics::GLOBAL_METRICS;
use crate::types::{OpenAiTool, ToolDefinition};

/// Trait that all tool handlers must implement.
///
/// Each tool is a struct providing its definition and execution logic. The
/// returned JSON value is what gets serialized into the payload handed back
/// to the chat API.
///
/// # Example
///
/// ```rust,ignore
/// use quill::tools::ToolHandler;
/// use quill::types::ToolDefinition;
///
/// struct MyTool;
///
/// #[async_trait]
/// impl ToolHandler for MyTool {
///     fn definition(&self) -> ToolDefinition {
///         ToolDefinition::new("my_tool", "Does something useful")
///     }
///
///     async fn execute(&self, input: serde_json::Value) -> Result<serde_json::Value, ToolError> {
///         Ok(serde_json::json!({ "done": true }))
///     }
/// }
/// ```
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Get the tool definition (name, description, parameter schema).
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with the given input parameters.
    async fn execute(&self, input: serde_json::Value) -> Result<serde_json::Value, ToolError>;
}

/// Outcome of dispatching one tool call.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The handler ran; payload is its JSON-serialized result.
    Completed(String),
    /// No tool is registered under the requested name.
    NotFound,
    /// The handler (or result serialization) failed.
    Failed(ToolError),
}

impl DispatchOutcome {
    /// Collapse into the nullable payload the chat API contract expects.
    pub fn into_payload(self) -> Option<String> {
        match self {
            Self::Completed(payload) => Some(payload),
            Self::NotFound | Self::Failed(_) => None,
        }
    }

    /// Check if the dispatch produced a payload.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Registry of available tools, maps names to handlers.
///
/// Registration order is preserved for the API advertisement; registering a
/// name twice replaces the handler but keeps the original slot.
pub struct ToolRegistry {
    handlers: HashMap<String, Arc<dyn ToolHandler>>,
    order: Vec<String>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a registry with the default tools.
    pub fn with_defaults() -> Self {
        let mut builder = ToolRegistryBuilder::new();

        builder.register(super::handlers::WeatherHandler);
        builder.register(super::handlers::FetchWebHandler::new());

        builder.build()
    }

    /// Register a tool handler, replacing any previous handler for its name.
    pub fn register<T: ToolHandler + 'static>(&mut self, handler: T) {
        self.register_boxed(Arc::new(handler));
    }

    /// Register a tool handler (boxed version for dynamic registration).
    pub fn register_boxed(&mut self, handler: Arc<dyn ToolHandler>) {
        let name = handler.definition().name;
        if self.handlers.insert(name.clone(), handler).is_none() {
            self.order.push(name);
        }
    }

    /// Get a handler by tool name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Check if a tool exists.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Get all tool names in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Project the registry into the OpenAI `tools` array, registration order.
    pub fn to_openai_tools(&self) -> Vec<OpenAiTool> {
        self.order
            .iter()
            .filter_map(|name| self.handlers.get(name))
            .map(|handler| OpenAiTool::from(handler.definition()))
            .collect()
    }

    /// Dispatch a tool call and return the explicit outcome.
    ///
    /// When the `telemetry` feature is enabled, the call is instrumented with
    /// a tracing span and recorded in the global metrics.
    pub async fn dispatch(&self, name: &str, input: serde_json::Value) -> DispatchOutcome {
        let Some(handler) = self.get(name) else {
            warn!(tool = %name, "Tool not found");
            return DispatchOutcome::NotFound;
        };

        #[cfg(feature = "telemetry")]
        debug!(tool = %name, "Executing tool");

        #[cfg(feature = "telemetry")]
        let start = Instant::now();

        #[cfg(feature = "telemetry")]
        let result = handler
            .execute(input)
            .instrument(info_span!("tool_execute", tool = %name))
            .await;

        #[cfg(not(feature = "telemetry"))]
        let result = handler.execute(input).await;

        #[cfg(feature = "telemetry")]
        GLOBAL_METRICS.record_tool(name, start.elapsed(), result.is_ok());

        match result {
            Ok(value) => match serde_json::to_string(&value) {
                Ok(payload) => DispatchOutcome::Completed(payload),
                Err(err) => {
                    warn!(tool = %name, error = %err, "Tool result serialization failed");
                    DispatchOutcome::Failed(ToolError::Serialization(err.to_string()))
                }
            },
            Err(err) => {
                warn!(tool = %name, error = %err, "Tool execution failed");
                DispatchOutcome::Failed(err)
            }
        }
    }

    /// Execute a tool by name, collapsing the outcome into a nullable payload.
    pub async fn execute_tool(&self, name: &str, input: serde_json::Value) -> Option<String> {
        self.dispatch(name, input).await.into_payload()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a ToolRegistry.
pub struct ToolRegistryBuilder {
    registry: ToolRegistry,
}

impl ToolRegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            registry: ToolRegistry::new(),
        }
    }

    /// Register a tool handler.
    pub fn register<T: ToolHandler + 'static>(&mut self, handler: T) -> &mut Self {
        self.registry.register(handler);
        self
    }

    /// Register a tool handler (boxed version for dynamic registration).
    pub fn register_boxed(&mut self, handler: Arc<dyn ToolHandler>) -> &mut Self {
        self.registry.register_boxed(handler);
        self
    }

    /// Build the final registry.
    pub fn build(self) -> ToolRegistry {
        self.registry
    }
}

impl Default for ToolRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
