// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Editor state snapshot and notification capability.
//!
//! [`EditorContext`] is the capability bundle template variables resolve
//! against: a read-only snapshot of editor state (active file, workspace
//! root, selection) captured by the caller at the start of a substitution
//! request. The engine never reaches into ambient process state; whoever
//! calls it decides what "the editor" currently looks like.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

use crate::template::timefmt;

/// Characters that cannot appear in a filename-bound selection.
pub const ILLEGAL_FILENAME_CHARS: &[char] =
    &['\\', '/', ':', '*', '?', '"', '<', '>', '|', '\r', '\n'];

/// Message surfaced when a selection is rejected for illegal characters.
const ILLEGAL_SELECTION_MESSAGE: &str =
    "The selected text contains illegal characters that cannot be used as a file name!";

/// Fire-and-forget sink for user-facing messages.
///
/// Accessors may surface informational notices (never errors) through this
/// trait; delivery must not block resolution.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Surface an informational message to the user.
    fn info(&self, message: &str);
}

/// Notifier that discards all messages.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn info(&self, _message: &str) {}
}

/// Notifier that routes messages to the tracing log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn info(&self, message: &str) {
        tracing::info!(target: "quill::notify", "{message}");
    }
}

/// Read-only snapshot of editor state for one substitution call.
///
/// Construct with the builder methods, handing over whatever parts of the
/// editor state are known; absent parts degrade per accessor (see the
/// individual methods).
#[derive(Clone)]
pub struct EditorContext {
    file_path: Option<PathBuf>,
    workspace_root: Option<PathBuf>,
    file_workspace_folder: Option<PathBuf>,
    selection: Option<String>,
    notifier: Arc<dyn Notifier>,
}

impl EditorContext {
    /// Create an empty snapshot (no file, no workspace, no selection).
    pub fn new() -> Self {
        Self {
            file_path: None,
            workspace_root: None,
            file_workspace_folder: None,
            selection: None,
            notifier: Arc::new(NullNotifier),
        }
    }

    /// Set the active file path.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Set the first workspace folder.
    pub fn with_workspace_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.workspace_root = Some(path.into());
        self
    }

    /// Set the workspace folder that owns the active file.
    pub fn with_file_workspace_folder(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_workspace_folder = Some(path.into());
        self
    }

    /// Set the current selection text.
    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = Some(selection.into());
        self
    }

    /// Set the notification sink.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// The active file path, if a file is open.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// The active file path as text.
    pub fn file_path_text(&self) -> Option<String> {
        self.file_path().map(|p| p.to_string_lossy().into_owned())
    }

    /// The first workspace folder, or `""` when no workspace is open.
    pub fn workspace_root_text(&self) -> String {
        self.workspace_root
            .as_deref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The workspace folder owning the active file, or `""`.
    pub fn file_workspace_folder_text(&self) -> String {
        self.file_workspace_folder
            .as_deref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Basename of the file's workspace folder, or `""`.
    pub fn workspace_folder_basename(&self) -> String {
        self.file_workspace_folder
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Basename of the active file, including its extension.
    pub fn file_basename(&self) -> Option<String> {
        self.file_path().map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }

    /// Extension of the active file with its leading dot, `""` when none.
    pub fn file_extname(&self) -> Option<String> {
        self.file_path().map(|p| match p.extension() {
            Some(ext) => format!(".{}", ext.to_string_lossy()),
            None => String::new(),
        })
    }

    /// Basename of the active file without its extension.
    pub fn file_basename_no_extension(&self) -> Option<String> {
        self.file_path().map(|p| {
            p.file_stem()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }

    /// Directory of the active file.
    pub fn file_dirname(&self) -> Option<String> {
        self.file_path().map(|p| {
            p.parent()
                .map(|d| d.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }

    /// Directory of the active file relative to its workspace folder.
    ///
    /// Falls back to the absolute directory when the folder is unknown or
    /// does not prefix the file's path.
    pub fn relative_file_dirname(&self) -> Option<String> {
        self.file_path().map(|p| {
            let dir = p.parent().unwrap_or_else(|| Path::new(""));
            let rel = match self.file_workspace_folder.as_deref() {
                Some(folder) => dir.strip_prefix(folder).unwrap_or(dir),
                None => dir,
            };
            rel.to_string_lossy().into_owned()
        })
    }

    /// The current selection, if usable as a filename fragment.
    ///
    /// Returns the raw selection when it is non-empty after trimming and
    /// contains none of [`ILLEGAL_FILENAME_CHARS`]. Otherwise returns
    /// `default_text` (empty string when omitted); an illegal selection also
    /// surfaces one informational notification.
    pub fn selected_text(&self, default_text: Option<&str>) -> String {
        let fallback = default_text.unwrap_or("");
        let selection = self.selection.as_deref().unwrap_or("");

        if !selection.is_empty() && selection.contains(ILLEGAL_FILENAME_CHARS) {
            self.notifier.info(ILLEGAL_SELECTION_MESSAGE);
            return fallback.to_string();
        }
        if selection.trim().is_empty() {
            return fallback.to_string();
        }

        selection.to_string()
    }

    /// The current local time formatted with a compact pattern.
    pub fn datetime(&self, pattern: Option<&str>) -> String {
        timefmt::format_now(pattern.unwrap_or(timefmt::DEFAULT_PATTERN))
    }

    /// A fresh random v4 UUID, different on every invocation.
    pub fn uuid(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EditorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorContext")
            .field("file_path", &self.file_path)
            .field("workspace_root", &self.workspace_root)
            .field("file_workspace_folder", &self.file_workspace_folder)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with_file() -> EditorContext {
        EditorContext::new()
            .with_file("/ws/app/src/main.ts")
            .with_workspace_root("/ws")
            .with_file_workspace_folder("/ws/app")
    }

    #[test]
    fn test_path_accessors() {
        let ctx = ctx_with_file();
        assert_eq!(ctx.file_path_text().unwrap(), "/ws/app/src/main.ts");
        assert_eq!(ctx.file_basename().unwrap(), "main.ts");
        assert_eq!(ctx.file_extname().unwrap(), ".ts");
        assert_eq!(ctx.file_basename_no_extension().unwrap(), "main");
        assert_eq!(ctx.file_dirname().unwrap(), "/ws/app/src");
        assert_eq!(ctx.relative_file_dirname().unwrap(), "src");
        assert_eq!(ctx.workspace_root_text(), "/ws");
        assert_eq!(ctx.file_workspace_folder_text(), "/ws/app");
        assert_eq!(ctx.workspace_folder_basename(), "app");
    }

    #[test]
    fn test_path_accessors_without_file() {
        let ctx = EditorContext::new();
        assert!(ctx.file_basename().is_none());
        assert!(ctx.file_extname().is_none());
        assert!(ctx.relative_file_dirname().is_none());
        assert_eq!(ctx.workspace_root_text(), "");
        assert_eq!(ctx.workspace_folder_basename(), "");
    }

    #[test]
    fn test_file_extname_no_extension() {
        let ctx = EditorContext::new().with_file("/ws/Makefile");
        assert_eq!(ctx.file_extname().unwrap(), "");
        assert_eq!(ctx.file_basename_no_extension().unwrap(), "Makefile");
    }

    #[test]
    fn test_relative_dirname_outside_folder() {
        let ctx = EditorContext::new()
            .with_file("/elsewhere/src/lib.rs")
            .with_file_workspace_folder("/ws/app");
        assert_eq!(ctx.relative_file_dirname().unwrap(), "/elsewhere/src");
    }

    #[test]
    fn test_selected_text_plain() {
        let ctx = EditorContext::new().with_selection("my-note");
        assert_eq!(ctx.selected_text(None), "my-note");
        assert_eq!(ctx.selected_text(Some("fallback")), "my-note");
    }

    #[test]
    fn test_selected_text_empty_selection() {
        let ctx = EditorContext::new();
        assert_eq!(ctx.selected_text(None), "");
        assert_eq!(ctx.selected_text(Some("fallback")), "fallback");

        let ctx = EditorContext::new().with_selection("   ");
        assert_eq!(ctx.selected_text(Some("fallback")), "fallback");
    }

    #[test]
    fn test_selected_text_illegal_characters_notify_once() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_info()
            .withf(|msg: &str| msg.contains("illegal characters"))
            .times(1)
            .return_const(());

        let ctx = EditorContext::new()
            .with_selection("a:b")
            .with_notifier(Arc::new(notifier));
        assert_eq!(ctx.selected_text(Some("default")), "default");
    }

    #[test]
    fn test_selected_text_newline_is_illegal() {
        let ctx = EditorContext::new().with_selection("line1\nline2");
        assert_eq!(ctx.selected_text(Some("d")), "d");
    }

    #[test]
    fn test_uuid_is_fresh() {
        let ctx = EditorContext::new();
        assert_ne!(ctx.uuid(), ctx.uuid());
    }

    #[test]
    fn test_datetime_default_pattern() {
        let ctx = EditorContext::new();
        let stamp = ctx.datetime(None);
        assert_eq!(stamp.len(), 14);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
