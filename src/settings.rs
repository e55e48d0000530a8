//! Game settings and preferences
//!
//! Persisted as `settings.json` in the data directory. Unknown or missing
//! fields fall back to their defaults, and an unreadable file yields the
//! default settings.

use serde::{Deserialize, Serialize};

use crate::persistence::{FileStore, Result};
use crate::tuning::Difficulty;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Shown on the title screen
    pub player_name: String,
    /// Background music loop
    pub music_enabled: bool,
    /// Sound effects
    pub sfx_enabled: bool,
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            music_enabled: true,
            sfx_enabled: true,
            difficulty: Difficulty::Normal,
        }
    }
}

impl Settings {
    /// File name inside the data directory
    pub const FILE_NAME: &'static str = "settings.json";

    /// Longest accepted player name, in characters
    pub const MAX_NAME_LEN: usize = 20;

    /// Load settings, falling back to defaults on any failure
    pub fn load(store: &FileStore) -> Self {
        match store.load_json::<Settings>(Self::FILE_NAME) {
            Ok(Some(mut settings)) => {
                let name = std::mem::take(&mut settings.player_name);
                settings.set_player_name(&name);
                log::info!("Loaded settings from {}", store.path_of(Self::FILE_NAME).display());
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &FileStore) -> Result<()> {
        store.save_json(Self::FILE_NAME, self)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Trimmed and length-limited; blank names keep the default
    pub fn set_player_name(&mut self, name: &str) {
        let name: String = name.trim().chars().take(Self::MAX_NAME_LEN).collect();
        self.player_name = if name.is_empty() {
            Self::default().player_name
        } else {
            name
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let settings = Settings {
            player_name: "Mira".to_string(),
            music_enabled: false,
            sfx_enabled: true,
            difficulty: Difficulty::Hard,
        };
        settings.save(&store).unwrap();
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.save_text(Settings::FILE_NAME, "]]").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn test_partial_and_legacy_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store
            .save_text(Settings::FILE_NAME, r#"{"difficulty": "Zor", "music_enabled": false}"#)
            .unwrap();
        let settings = Settings::load(&store);
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert!(!settings.music_enabled);
        assert!(settings.sfx_enabled);
        assert_eq!(settings.player_name, "Player");
    }

    #[test]
    fn test_player_name_sanitized() {
        let mut settings = Settings::default();
        settings.set_player_name("   ");
        assert_eq!(settings.player_name, "Player");
        settings.set_player_name("  a very long player name indeed  ");
        assert_eq!(settings.player_name.chars().count(), Settings::MAX_NAME_LEN);
        assert!(settings.player_name.starts_with("a very"));
    }
}
