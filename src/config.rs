//! Optional user settings.
//!
//! Settings live in a small JSON file; every field is optional and a missing
//! file simply means defaults, so the app runs without any setup. The item
//! list itself is never persisted.

use crate::sort::SortMode;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved settings after defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Ordering used when the session starts.
    pub sort: SortMode,
    /// Whether clearing the list asks for confirmation first.
    pub confirm_clear: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort: SortMode::Input,
            confirm_clear: true,
        }
    }
}

/// On-disk shape. `sort` stays a free-form string here so an unknown mode
/// degrades with a warning instead of failing the whole parse.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    #[serde(default)]
    sort: Option<String>,
    #[serde(default)]
    confirm_clear: Option<bool>,
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Self {
        let defaults = Settings::default();
        Settings {
            sort: raw
                .sort
                .as_deref()
                .map(SortMode::parse_or_default)
                .unwrap_or(defaults.sort),
            confirm_clear: raw.confirm_clear.unwrap_or(defaults.confirm_clear),
        }
    }
}

/// Default settings location under the platform config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("faraway").join("config.json"))
}

/// Load settings from `path`, or from the default location when `None`.
///
/// A missing file yields defaults; an unreadable or malformed file is an
/// error, since silently ignoring a file the user wrote would hide typos.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_settings_path() {
            Some(path) => path,
            None => return Ok(Settings::default()),
        },
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    let bytes = fs::read(&path).with_context(|| format!("read settings {}", path.display()))?;
    let raw: RawSettings = serde_json::from_slice(&bytes).context("parse settings JSON")?;
    Ok(Settings::from_raw(raw))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
