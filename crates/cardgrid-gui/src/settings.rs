//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed. A missing
//! or unreadable file yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GuiError;

const SETTINGS_FILE: &str = "settings.toml";

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Collection folder opened most recently.
    pub last_collection: Option<PathBuf>,

    /// Deck shown most recently.
    pub last_deck: Option<String>,

    /// Maximum number of cards loaded from a deck.
    pub card_limit: Option<usize>,

    /// Reopen `last_collection` when the application starts.
    pub open_last_on_startup: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            last_collection: None,
            last_deck: None,
            card_limit: None,
            open_last_on_startup: true,
        }
    }
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), GuiError> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        let failed = |reason: String| GuiError::SettingsSave {
            path: path.to_path_buf(),
            reason,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| failed(e.to_string()))?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| failed(e.to_string()))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "CardsGridPreview", "CardsGridPreview")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
    }

    /// The collection to open at startup, if it still exists.
    pub fn startup_collection(&self) -> Option<&Path> {
        if !self.open_last_on_startup {
            return None;
        }
        self.last_collection.as_deref().filter(|path| path.is_dir())
    }

    /// Remember `path` as the last collection. A different collection
    /// forgets the last deck.
    pub fn remember_collection(&mut self, path: &Path) {
        if self.last_collection.as_deref() != Some(path) {
            self.last_deck = None;
        }
        self.last_collection = Some(path.to_path_buf());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.toml"));
        assert_eq!(settings, Settings::default());
        assert!(settings.open_last_on_startup);
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "card_limit = \"many\"").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let settings = Settings {
            last_collection: Some(dir.path().to_path_buf()),
            last_deck: Some("Spanish::Verbs".to_string()),
            card_limit: Some(500),
            open_last_on_startup: false,
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "card_limit = 20\n").unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.card_limit, Some(20));
        assert!(settings.open_last_on_startup);
    }

    #[test]
    fn test_startup_collection_requires_existing_folder() {
        let dir = TempDir::new().unwrap();
        let mut settings = Settings::default();
        settings.remember_collection(dir.path());
        assert_eq!(settings.startup_collection(), Some(dir.path()));

        settings.open_last_on_startup = false;
        assert_eq!(settings.startup_collection(), None);

        settings.open_last_on_startup = true;
        settings.last_collection = Some(dir.path().join("gone"));
        assert_eq!(settings.startup_collection(), None);
    }

    #[test]
    fn test_new_collection_forgets_deck() {
        let mut settings = Settings::default();
        settings.remember_collection(Path::new("/a"));
        settings.last_deck = Some("Spanish".to_string());

        settings.remember_collection(Path::new("/a"));
        assert_eq!(settings.last_deck.as_deref(), Some("Spanish"));

        settings.remember_collection(Path::new("/b"));
        assert_eq!(settings.last_deck, None);
    }
}
