// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Substitution engine.
//!
//! Orchestrates scanning and resolution over a whole template string:
//! every recognized `${...}` occurrence is replaced in place with its
//! resolved value, unrecognized placeholders stay literal, and the result
//! goes through a single path-separator normalization pass.

#[cfg(feature = "telemetry")]
use std::time::Instant;

#[cfg(feature = "telemetry")]
use tracing::debug;

#[cfg(feature = "telemetry")]
use crate::telemetry::metrics::GLOBAL_METRICS;

use crate::error::TemplateError;
use crate::template::context::EditorContext;
use crate::template::scanner::PlaceholderScanner;
use crate::template::vars::VariableRegistry;

/// Expands `${name}` / `${name|param}` placeholders against an editor
/// context snapshot.
///
/// The engine owns no per-call state: `expand` is a pure transformation of
/// `(template, context)` into a string, apart from accessor side effects
/// (notifications, fresh UUIDs).
pub struct TemplateEngine {
    vars: VariableRegistry,
}

impl TemplateEngine {
    /// Create an engine over an explicit variable registry.
    pub fn new(vars: VariableRegistry) -> Self {
        Self { vars }
    }

    /// Create an engine with the recognized editor variables installed.
    pub fn with_defaults() -> Self {
        Self::new(VariableRegistry::with_defaults())
    }

    /// The variable registry backing this engine.
    pub fn vars(&self) -> &VariableRegistry {
        &self.vars
    }

    /// Mutable access to the registry, for registering additional variables.
    pub fn vars_mut(&mut self) -> &mut VariableRegistry {
        &mut self.vars
    }

    /// Expand all placeholders in `template` against `ctx`.
    ///
    /// Replacement is position-indexed: each occurrence is resolved
    /// independently, so identical tokens never substitute into each other's
    /// positions and stateful accessors (`uuid`) yield per-occurrence values.
    /// Unknown variable names leave their placeholder untouched; accessor
    /// failures abort the whole expansion.
    ///
    /// The returned string always has backslashes converted to forward
    /// slashes, placeholders or not; callers feed path-shaped templates from
    /// both separator conventions.
    pub fn expand(&self, template: &str, ctx: &EditorContext) -> Result<String, TemplateError> {
        #[cfg(feature = "telemetry")]
        let start = Instant::now();
        #[cfg(feature = "telemetry")]
        let mut resolved = 0usize;

        let mut out = String::with_capacity(template.len());
        let mut cursor = 0usize;

        for ph in PlaceholderScanner::new(template) {
            out.push_str(&template[cursor..ph.start]);
            match self.vars.resolve(&ph.name, ph.param.as_deref(), ctx)? {
                Some(value) => {
                    out.push_str(&value);
                    #[cfg(feature = "telemetry")]
                    {
                        resolved += 1;
                    }
                }
                None => out.push_str(&ph.full_token),
            }
            cursor = ph.end;
        }
        out.push_str(&template[cursor..]);

        let normalized = out.replace('\\', "/");

        #[cfg(feature = "telemetry")]
        {
            GLOBAL_METRICS.record_operation("template_expand", start.elapsed());
            debug!(resolved, len = normalized.len(), "Template expanded");
        }

        Ok(normalized)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::template::context::MockNotifier;

    fn ts_context() -> EditorContext {
        EditorContext::new()
            .with_file("/ws/app/src/main.ts")
            .with_workspace_root("/ws")
            .with_file_workspace_folder("/ws/app")
    }

    #[test]
    fn test_expand_no_placeholders_is_identity() {
        let engine = TemplateEngine::with_defaults();
        let ctx = EditorContext::new();
        assert_eq!(engine.expand("plain text", &ctx).unwrap(), "plain text");
        assert_eq!(engine.expand("", &ctx).unwrap(), "");
    }

    #[test]
    fn test_expand_normalizes_backslashes_without_placeholders() {
        let engine = TemplateEngine::with_defaults();
        let ctx = EditorContext::new();
        assert_eq!(engine.expand(r"a\b\c", &ctx).unwrap(), "a/b/c");
    }

    #[test]
    fn test_expand_unknown_variable_stays_literal() {
        let engine = TemplateEngine::with_defaults();
        let ctx = EditorContext::new();
        assert_eq!(
            engine.expand("${notARealVar}", &ctx).unwrap(),
            "${notARealVar}"
        );
    }

    #[test]
    fn test_expand_uuid_is_fresh_per_call() {
        let engine = TemplateEngine::with_defaults();
        let ctx = EditorContext::new();
        let first = engine.expand("${uuid}", &ctx).unwrap();
        let second = engine.expand("${uuid}", &ctx).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_expand_uuid_is_fresh_per_occurrence() {
        let engine = TemplateEngine::with_defaults();
        let ctx = EditorContext::new();
        let result = engine.expand("${uuid}/${uuid}", &ctx).unwrap();
        let (a, b) = result.split_once('/').unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_expand_datetime_year() {
        let engine = TemplateEngine::with_defaults();
        let ctx = EditorContext::new();
        let year = chrono::Local::now().format("%Y").to_string();
        assert_eq!(engine.expand("${datetime|yyyy}", &ctx).unwrap(), year);
    }

    #[test]
    fn test_expand_mixed_literal_and_placeholder() {
        let engine = TemplateEngine::with_defaults();
        let ctx = ts_context();
        assert_eq!(
            engine.expand(r"a/${fileExtname}/b\c", &ctx).unwrap(),
            "a/.ts/b/c"
        );
    }

    #[test]
    fn test_expand_path_variables() {
        let engine = TemplateEngine::with_defaults();
        let ctx = ts_context();
        assert_eq!(
            engine
                .expand("${workspaceFolderBasename}/${relativeFileDirname}/${fileBasenameNoExtension}", &ctx)
                .unwrap(),
            "app/src/main"
        );
    }

    #[test]
    fn test_expand_whitespace_inside_braces() {
        let engine = TemplateEngine::with_defaults();
        let ctx = ts_context();
        assert_eq!(engine.expand("${ fileBasename }", &ctx).unwrap(), "main.ts");
    }

    #[test]
    fn test_expand_file_variable_without_file_fails() {
        let engine = TemplateEngine::with_defaults();
        let ctx = EditorContext::new();
        let err = engine.expand("${fileDirname}", &ctx).unwrap_err();
        assert!(matches!(err, TemplateError::NoActiveFile(_)));
    }

    #[test]
    fn test_expand_selected_text_with_default() {
        let engine = TemplateEngine::with_defaults();
        let ctx = EditorContext::new();
        assert_eq!(
            engine.expand("${selectedText|fallback}", &ctx).unwrap(),
            "fallback"
        );
        assert_eq!(engine.expand("${selectedText}", &ctx).unwrap(), "");
    }

    #[test]
    fn test_expand_illegal_selection_notifies_once() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_info()
            .withf(|msg: &str| msg.contains("illegal characters"))
            .times(1)
            .return_const(());

        let engine = TemplateEngine::with_defaults();
        let ctx = EditorContext::new()
            .with_selection("a:b")
            .with_notifier(Arc::new(notifier));
        assert_eq!(
            engine.expand("${selectedText|default}", &ctx).unwrap(),
            "default"
        );
    }

    #[test]
    fn test_expand_selection_value_survives() {
        let engine = TemplateEngine::with_defaults();
        let ctx = EditorContext::new().with_selection("release-notes");
        assert_eq!(
            engine.expand("${selectedText|fallback}.md", &ctx).unwrap(),
            "release-notes.md"
        );
    }

    #[test]
    fn test_expand_static_registered_variable() {
        let mut engine = TemplateEngine::with_defaults();
        engine.vars_mut().register_static("project", "quill");
        let ctx = EditorContext::new();
        assert_eq!(
            engine.expand("${project}/notes", &ctx).unwrap(),
            "quill/notes"
        );
    }

    #[test]
    fn test_expand_adjacent_and_repeated_tokens() {
        let mut engine = TemplateEngine::with_defaults();
        engine.vars_mut().register_static("a", "1");
        let ctx = EditorContext::new();
        assert_eq!(engine.expand("${a}${a}${a}", &ctx).unwrap(), "111");
    }

    #[test]
    fn test_expand_resolved_value_is_not_rescanned() {
        let mut engine = TemplateEngine::with_defaults();
        engine.vars_mut().register_static("outer", "${inner}");
        engine.vars_mut().register_static("inner", "nope");
        let ctx = EditorContext::new();
        assert_eq!(engine.expand("${outer}", &ctx).unwrap(), "${inner}");
    }
}
