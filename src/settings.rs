use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::i18n::Language;

fn default_api_url() -> String {
    "http://192.168.178.59/api/click".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// User settings: the door endpoint and the UI language. Loaded once at
/// startup, written back only on an explicit save from the settings modal.
/// A missing field falls back to its compiled-in default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            language: default_language(),
        }
    }
}

impl Settings {
    pub fn file_path(data_dir: &Path) -> PathBuf {
        data_dir.join("settings.json")
    }

    pub fn language(&self) -> Language {
        Language::from_code(&self.language)
    }

    pub fn load(data_dir: &Path) -> Self {
        let path = Self::file_path(data_dir);
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match serde_json::from_str(&contents) {
                    Ok(settings) => return settings,
                    Err(e) => log::warn!("Failed to parse settings: {}, using defaults", e),
                },
                Err(e) => log::warn!("Failed to read settings: {}, using defaults", e),
            }
        }
        Self::default()
    }

    /// Both fields land in one file write, so a save either persists the
    /// whole staged state or nothing.
    pub fn save(&self, data_dir: &Path) -> Result<(), String> {
        let path = Self::file_path(data_dir);
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(&path, json).map_err(|e| e.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
