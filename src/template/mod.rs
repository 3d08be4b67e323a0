// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Template variable expansion.
//!
//! Expands `${name}` and `${name|param}` placeholders in a string against a
//! snapshot of editor state. This is what turns a configured naming template
//! like `notes/${datetime|yyyy-MM-DD}-${selectedText|untitled}.md` into a
//! concrete path.
//!
//! # Architecture
//!
//! - [`PlaceholderScanner`] - tokenizes a template into placeholder occurrences
//! - [`VariableRegistry`] - dispatch table from variable name to accessor
//! - [`EditorContext`] - caller-built snapshot the accessors read from
//! - [`TemplateEngine`] - drives scan → resolve → replace → normalize
//!
//! # Example
//!
//! ```rust,ignore
//! use quill::template::{EditorContext, TemplateEngine};
//!
//! let engine = TemplateEngine::with_defaults();
//! let ctx = EditorContext::new()
//!     .with_file("/ws/app/src/main.ts")
//!     .with_workspace_root("/ws");
//!
//! let out = engine.expand("${fileBasenameNoExtension}-${datetime|yyyyMMDD}", &ctx)?;
//! ```
//!
//! Unknown variables are left untouched rather than erroring: a template is
//! allowed to carry placeholders this engine does not own. A recognized
//! accessor that cannot produce a value (file variable with no open file) is
//! a hard error instead.

pub mod context;
pub mod engine;
pub mod scanner;
pub mod timefmt;
pub mod vars;

pub use context::{EditorContext, LogNotifier, Notifier, NullNotifier, ILLEGAL_FILENAME_CHARS};
pub use engine::TemplateEngine;
pub use scanner::{Placeholder, PlaceholderScanner};
pub use vars::{VariableFn, VariableRegistry};
