//! Game settings and preferences
//!
//! Persisted as JSON next to the scores in the same key-value store.

use serde::{Deserialize, Serialize};

use crate::consts::SETTINGS_KEY;
use crate::persistence::KeyValueStore;

/// Color scheme for the play field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Palette {
    /// White player and border, red enemies
    #[default]
    Classic,
    /// Yellow player, magenta enemies
    HighContrast,
}

impl Palette {
    pub fn as_str(&self) -> &'static str {
        match self {
            Palette::Classic => "Classic",
            Palette::HighContrast => "High contrast",
        }
    }

    /// Cycle order used by the palette key
    pub fn next(self) -> Self {
        match self {
            Palette::Classic => Palette::HighContrast,
            Palette::HighContrast => Palette::Classic,
        }
    }

    pub fn player_color(&self) -> &'static str {
        match self {
            Palette::Classic => "white",
            Palette::HighContrast => "#ffff00",
        }
    }

    pub fn enemy_color(&self) -> &'static str {
        match self {
            Palette::Classic => "red",
            Palette::HighContrast => "#ff00ff",
        }
    }

    pub fn border_color(&self) -> &'static str {
        match self {
            Palette::Classic => "white",
            Palette::HighContrast => "#ffffff",
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Entity and border colors
    pub palette: Palette,
    /// Play field border stroke width (px)
    pub border_width: f64,
    /// Render the leaderboard table
    pub show_leaderboard: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: Palette::Classic,
            border_width: 2.0,
            show_leaderboard: true,
        }
    }
}

impl Settings {
    /// Load settings from the store, falling back to defaults
    pub fn load(store: &impl KeyValueStore) -> Self {
        if let Some(json) = store.get_item(SETTINGS_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(err) => log::warn!("Ignoring malformed settings: {}", err),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to the store
    pub fn save(&self, store: &mut impl KeyValueStore) {
        if let Ok(json) = serde_json::to_string(self) {
            store.set_item(SETTINGS_KEY, &json);
            log::info!("Settings saved");
        }
    }
}
