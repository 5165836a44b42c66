//! Builder configuration.
//!
//! All fields have defaults, so an empty JSON object (or no file at all) is a
//! valid configuration.

use crate::error::{EditorError, EditorResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// `<title>` of the exported document.
    pub title: String,
    /// `lang` attribute of the exported `<html>` element.
    pub lang: String,
    /// Maximum number of undo steps kept.
    pub history_depth: usize,
    /// Text shown on an empty canvas.
    pub empty_message: String,
    /// Prompt shown before clearing the canvas.
    pub confirm_message: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            title: "Exported Page".to_string(),
            lang: "en".to_string(),
            history_depth: 100,
            empty_message: "Drag components here to start building".to_string(),
            confirm_message: "Are you sure you want to clear the canvas?".to_string(),
        }
    }
}

impl BuilderConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> EditorResult<Self> {
        serde_json::from_str(text).map_err(|e| EditorError::config(e.to_string()))
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> EditorResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| EditorError::config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }
}
