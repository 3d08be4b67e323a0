// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Quill - editor template variables and LLM tool dispatch.
//!
//! The Rust core of the Quill editor assistant: the pieces that turn a
//! naming template like `notes/${datetime|yyyy-MM-DD}-${selectedText}.md`
//! into a concrete string, and that expose named tools to an LLM chat API.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`types`] - Core type definitions (ToolDefinition, OpenAI projection)
//! - [`error`] - Error types and result aliases
//! - [`config`] - Configuration loading and merging
//! - [`template`] - Placeholder scanning, variable resolution, expansion
//! - [`tools`] - Tool handlers and registry
//! - [`telemetry`] - Tracing and metrics infrastructure
//!
//! # Example
//!
//! ```rust,ignore
//! use quill::template::{EditorContext, TemplateEngine};
//! use quill::tools::ToolRegistry;
//!
//! // Expand editor variables against an explicit snapshot
//! let engine = TemplateEngine::with_defaults();
//! let ctx = EditorContext::new().with_file("/ws/src/main.ts");
//! let name = engine.expand("${fileBasenameNoExtension}-${uuid}", &ctx)?;
//!
//! // Advertise and execute tools
//! let registry = ToolRegistry::with_defaults();
//! let advertised = registry.to_openai_tools();
//! ```

pub mod config;
pub mod error;
pub mod telemetry;
pub mod template;
pub mod tools;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ConfigError, Result, TemplateError, ToolError};
pub use template::{
    EditorContext, LogNotifier, Notifier, NullNotifier, Placeholder, PlaceholderScanner,
    TemplateEngine, VariableRegistry,
};
pub use tools::{DispatchOutcome, ToolHandler, ToolRegistry, ToolRegistryBuilder};
pub use types::{OpenAiFunction, OpenAiTool, ToolDefinition};

/// Quill version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
