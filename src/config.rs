// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Configuration loading and merging.
//!
//! Quill reads an optional workspace config (`.quill.json`, `.quill.yml` or
//! `.quill.yaml` at the workspace root) on top of an optional global config
//! (`~/.quill/config.json`). Workspace values win. Everything is optional;
//! a missing file is not an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::template::TemplateEngine;

/// Workspace config file names to search for (in order).
pub const WORKSPACE_CONFIG_FILES: &[&str] = &[".quill.json", ".quill.yml", ".quill.yaml"];

/// Global config directory name (under the home directory).
pub const GLOBAL_CONFIG_DIR: &str = ".quill";

/// Global config file name.
pub const GLOBAL_CONFIG_FILE: &str = "config.json";

/// User configuration for Quill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuillConfig {
    /// Constant template variables, expanded like the built-in ones.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub vars: HashMap<String, String>,

    /// Default pattern for `${datetime}` when no parameter is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime_format: Option<String>,

    /// Whether accessor notifications are surfaced to the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,
}

impl QuillConfig {
    /// Merge this config over `base`, with `self` taking precedence.
    ///
    /// Variables are unioned per key; scalars prefer `self` when set.
    pub fn merge_over(self, mut base: QuillConfig) -> QuillConfig {
        base.vars.extend(self.vars);
        QuillConfig {
            vars: base.vars,
            datetime_format: self.datetime_format.or(base.datetime_format),
            notifications: self.notifications.or(base.notifications),
        }
    }

    /// Install this config's variables into a template engine.
    pub fn apply_to(&self, engine: &mut TemplateEngine) {
        for (name, value) in &self.vars {
            engine.vars_mut().register_static(name, value);
        }

        if let Some(pattern) = &self.datetime_format {
            let pattern = pattern.clone();
            engine.vars_mut().register("datetime", move |ctx, param| {
                Ok(ctx.datetime(Some(param.unwrap_or(&pattern))))
            });
        }
    }

    /// Whether notifications should reach the user (defaults to on).
    pub fn notifications_enabled(&self) -> bool {
        self.notifications.unwrap_or(true)
    }
}

/// Get the global config directory path.
pub fn get_global_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(GLOBAL_CONFIG_DIR))
}

/// Get the global config file path.
pub fn get_global_config_path() -> Option<PathBuf> {
    get_global_config_dir().map(|dir| dir.join(GLOBAL_CONFIG_FILE))
}

/// Load global configuration from ~/.quill/config.json.
pub fn load_global_config() -> Result<Option<QuillConfig>, ConfigError> {
    let path = match get_global_config_path() {
        Some(p) => p,
        None => return Ok(None),
    };

    if !path.exists() {
        return Ok(None);
    }

    load_config_file(&path).map(Some)
}

/// Load workspace configuration from the workspace root.
pub fn load_workspace_config(workspace_root: &Path) -> Result<Option<QuillConfig>, ConfigError> {
    for filename in WORKSPACE_CONFIG_FILES {
        let path = workspace_root.join(filename);
        if path.exists() {
            return load_config_file(&path).map(Some);
        }
    }
    Ok(None)
}

/// Load a configuration file (JSON or YAML, by extension).
pub fn load_config_file(path: &Path) -> Result<QuillConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&content).map_err(ConfigError::from),
        _ => serde_json::from_str(&content).map_err(ConfigError::from),
    }
}

/// Load the effective config: global overlaid by the workspace, if any.
pub fn load_config(workspace_root: Option<&Path>) -> Result<QuillConfig, ConfigError> {
    let global = load_global_config()?;
    let workspace = match workspace_root {
        Some(root) => load_workspace_config(root)?,
        None => None,
    };

    Ok(match (global, workspace) {
        (Some(g), Some(w)) => w.merge_over(g),
        (Some(g), None) => g,
        (None, Some(w)) => w,
        (None, None) => QuillConfig::default(),
    })
}
