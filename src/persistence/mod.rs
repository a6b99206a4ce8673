//! Key-value persistence
//!
//! Scores and settings live in a flat string store keyed by fixed
//! identifiers. On the web that is `localStorage`; elsewhere an in-memory
//! map. Unreadable or malformed entries read back as defaults.

use std::collections::HashMap;

use crate::consts::{HIGH_SCORE_KEY, LEADERBOARD_KEY};
use crate::highscores::Leaderboard;

/// Flat string key-value store
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
}

/// In-memory store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}

/// Browser `localStorage`
#[cfg(target_arch = "wasm32")]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    /// Open the window's local storage; a missing store behaves as empty
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable, scores will not persist");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("Failed to write '{}' to localStorage", key);
            }
        }
    }
}

/// Read the best score (0 when missing or malformed)
pub fn read_high_score(store: &impl KeyValueStore) -> u64 {
    let Some(raw) = store.get_item(HIGH_SCORE_KEY) else {
        return 0;
    };
    match raw.trim().parse::<u64>() {
        Ok(score) => score,
        Err(_) => {
            log::warn!("Ignoring malformed high score {:?}", raw);
            0
        }
    }
}

pub fn write_high_score(store: &mut impl KeyValueStore, score: u64) {
    store.set_item(HIGH_SCORE_KEY, &score.to_string());
}

/// Read the leaderboard (empty when missing or malformed)
pub fn read_leaderboard(store: &impl KeyValueStore) -> Leaderboard {
    let Some(json) = store.get_item(LEADERBOARD_KEY) else {
        return Leaderboard::new();
    };
    match serde_json::from_str::<Vec<u64>>(&json) {
        Ok(scores) => {
            log::info!("Loaded {} leaderboard scores", scores.len());
            Leaderboard::from_scores(scores)
        }
        Err(err) => {
            log::warn!("Ignoring malformed leaderboard: {}", err);
            Leaderboard::new()
        }
    }
}

pub fn write_leaderboard(store: &mut impl KeyValueStore, leaderboard: &Leaderboard) {
    match serde_json::to_string(leaderboard.scores()) {
        Ok(json) => store.set_item(LEADERBOARD_KEY, &json),
        Err(err) => log::warn!("Failed to serialize leaderboard: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_default() {
        let store = MemoryStore::new();
        assert_eq!(read_high_score(&store), 0);
        assert!(read_leaderboard(&store).is_empty());
    }

    #[test]
    fn test_malformed_values_default() {
        let mut store = MemoryStore::new();
        store.set_item(HIGH_SCORE_KEY, "lots");
        store.set_item(LEADERBOARD_KEY, "[1, 2,");
        assert_eq!(read_high_score(&store), 0);
        assert!(read_leaderboard(&store).is_empty());

        store.set_item(LEADERBOARD_KEY, r#"{"scores": [1]}"#);
        assert!(read_leaderboard(&store).is_empty());
    }

    #[test]
    fn test_high_score_round_trip() {
        let mut store = MemoryStore::new();
        write_high_score(&mut store, 1234);
        assert_eq!(store.get_item(HIGH_SCORE_KEY).as_deref(), Some("1234"));
        assert_eq!(read_high_score(&store), 1234);
    }

    #[test]
    fn test_leaderboard_round_trip() {
        let mut store = MemoryStore::new();
        let mut board = Leaderboard::new();
        for score in [40, 400, 4, 40] {
            board.record(score);
        }
        write_leaderboard(&mut store, &board);
        assert_eq!(store.get_item(LEADERBOARD_KEY).as_deref(), Some("[400,40,40,4]"));
        assert_eq!(read_leaderboard(&store), board);
    }

    #[test]
    fn test_unsorted_stored_leaderboard_is_normalized() {
        let mut store = MemoryStore::new();
        store.set_item(LEADERBOARD_KEY, "[3, 9, 1]");
        assert_eq!(read_leaderboard(&store).scores(), &[9, 3, 1]);
    }
}
