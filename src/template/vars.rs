// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Variable resolver.
//!
//! Maps variable names to accessor functions over an [`EditorContext`]. The
//! table is built once per engine and dispatches by name; there is no
//! reflection anywhere, extension happens through [`VariableRegistry::register`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::TemplateError;
use crate::template::context::EditorContext;

/// A named accessor: zero or one string argument in, string out.
///
/// Failures propagate out of the whole expansion; side effects are limited to
/// notifications through the context's [`Notifier`](super::Notifier).
pub type VariableFn =
    Arc<dyn Fn(&EditorContext, Option<&str>) -> Result<String, TemplateError> + Send + Sync>;

/// Registry of template variables, maps names to accessors.
pub struct VariableRegistry {
    accessors: HashMap<String, VariableFn>,
}

impl VariableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            accessors: HashMap::new(),
        }
    }

    /// Create a registry with the recognized editor variables installed.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register("datetime", |ctx, param| Ok(ctx.datetime(param)));
        registry.register("uuid", |ctx, _param| Ok(ctx.uuid()));
        registry.register("selectedText", |ctx, param| Ok(ctx.selected_text(param)));

        registry.register("workspaceRoot", |ctx, _param| Ok(ctx.workspace_root_text()));
        registry.register("workspaceFolder", |ctx, _param| Ok(ctx.workspace_root_text()));
        registry.register("fileWorkspaceFolder", |ctx, _param| {
            Ok(ctx.file_workspace_folder_text())
        });
        registry.register("workspaceFolderBasename", |ctx, _param| {
            Ok(ctx.workspace_folder_basename())
        });

        registry.register("file", require_file("file", EditorContext::file_path_text));
        registry.register(
            "filePath",
            require_file("filePath", EditorContext::file_path_text),
        );
        registry.register(
            "fileBasename",
            require_file("fileBasename", EditorContext::file_basename),
        );
        registry.register(
            "fileExtname",
            require_file("fileExtname", EditorContext::file_extname),
        );
        registry.register(
            "fileBasenameNoExtension",
            require_file(
                "fileBasenameNoExtension",
                EditorContext::file_basename_no_extension,
            ),
        );
        registry.register(
            "fileDirname",
            require_file("fileDirname", EditorContext::file_dirname),
        );
        registry.register(
            "relativeFileDirname",
            require_file("relativeFileDirname", EditorContext::relative_file_dirname),
        );

        registry
    }

    /// Register an accessor under a name. A later registration for the same
    /// name replaces the earlier one.
    pub fn register<F>(&mut self, name: impl Into<String>, accessor: F)
    where
        F: Fn(&EditorContext, Option<&str>) -> Result<String, TemplateError>
            + Send
            + Sync
            + 'static,
    {
        self.accessors.insert(name.into(), Arc::new(accessor));
    }

    /// Register a constant-valued variable (used for config-defined vars).
    pub fn register_static(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        self.register(name, move |_ctx, _param| Ok(value.clone()));
    }

    /// Check if a variable is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.accessors.contains_key(name)
    }

    /// All registered variable names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.accessors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve one variable occurrence.
    ///
    /// `Ok(None)` means the name is not registered; the caller must leave the
    /// placeholder literal. An `Err` is an accessor failure and aborts the
    /// whole expansion.
    pub fn resolve(
        &self,
        name: &str,
        param: Option<&str>,
        ctx: &EditorContext,
    ) -> Result<Option<String>, TemplateError> {
        match self.accessors.get(name) {
            Some(accessor) => accessor(ctx, param).map(Some),
            None => Ok(None),
        }
    }
}

impl Default for VariableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn require_file(
    name: &'static str,
    get: fn(&EditorContext) -> Option<String>,
) -> impl Fn(&EditorContext, Option<&str>) -> Result<String, TemplateError> {
    move |ctx, _param| get(ctx).ok_or_else(|| TemplateError::NoActiveFile(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_recognized_variables() {
        let registry = VariableRegistry::with_defaults();
        for name in [
            "datetime",
            "workspaceRoot",
            "workspaceFolder",
            "filePath",
            "file",
            "fileWorkspaceFolder",
            "fileBasename",
            "fileExtname",
            "fileBasenameNoExtension",
            "fileDirname",
            "relativeFileDirname",
            "workspaceFolderBasename",
            "uuid",
            "selectedText",
        ] {
            assert!(registry.contains(name), "missing variable {name}");
        }
    }

    #[test]
    fn test_resolve_unknown_is_none() {
        let registry = VariableRegistry::with_defaults();
        let ctx = EditorContext::new();
        assert!(registry.resolve("notARealVar", None, &ctx).unwrap().is_none());
    }

    #[test]
    fn test_resolve_file_variable_without_file_fails() {
        let registry = VariableRegistry::with_defaults();
        let ctx = EditorContext::new();
        let err = registry.resolve("fileBasename", None, &ctx).unwrap_err();
        assert!(matches!(err, TemplateError::NoActiveFile(name) if name == "fileBasename"));
    }

    #[test]
    fn test_resolve_workspace_variable_without_workspace_is_empty() {
        let registry = VariableRegistry::with_defaults();
        let ctx = EditorContext::new();
        let value = registry.resolve("workspaceRoot", None, &ctx).unwrap();
        assert_eq!(value.as_deref(), Some(""));
    }

    #[test]
    fn test_register_overwrites() {
        let mut registry = VariableRegistry::new();
        registry.register_static("greeting", "hello");
        registry.register_static("greeting", "hola");

        let ctx = EditorContext::new();
        let value = registry.resolve("greeting", None, &ctx).unwrap();
        assert_eq!(value.as_deref(), Some("hola"));
    }

    #[test]
    fn test_register_custom_accessor_with_param() {
        let mut registry = VariableRegistry::new();
        registry.register("shout", |_ctx, param| {
            Ok(param.unwrap_or("hey").to_uppercase())
        });

        let ctx = EditorContext::new();
        assert_eq!(
            registry.resolve("shout", Some("quiet"), &ctx).unwrap().as_deref(),
            Some("QUIET")
        );
        assert_eq!(
            registry.resolve("shout", None, &ctx).unwrap().as_deref(),
            Some("HEY")
        );
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = VariableRegistry::new();
        registry.register_static("b", "2");
        registry.register_static("a", "1");
        assert_eq!(registry.names(), vec!["a", "b"]);
    }
}
