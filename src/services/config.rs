//! Client configuration.
//!
//! Defaults work out of the box; a JSON file (path from `CADENZA_CONFIG`, or
//! `cadenza.json` in the working directory) can override individual fields.

use crate::ui::core::theme::ThemeVariant;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event-poll timeout between frames, in milliseconds.
    pub frame_interval_ms: u64,
    pub mouse_capture: bool,
    pub theme: ThemeVariant,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 33,
            mouse_capture: true,
            theme: ThemeVariant::Dark,
        }
    }
}

impl UiConfig {
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Load the override file when present, falling back to defaults.
    pub fn load() -> Self {
        let path = std::env::var_os("CADENZA_CONFIG")
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| "cadenza.json".into());
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring unreadable config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/config.rs"]
mod tests;
