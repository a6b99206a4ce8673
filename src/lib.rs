//! Square Dodge - A dodge-the-squares arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, difficulty)
//! - `game`: Per-frame orchestration (render, tick, score records)
//! - `renderer`: 2D canvas draw calls
//! - `platform`: Browser/native platform abstraction
//! - `persistence`: Key-value storage for scores and settings
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod ui;

pub use game::{FrameOutcome, Game};
pub use highscores::Leaderboard;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Reference play field size; the canvas keeps this aspect ratio
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Entity hitbox edge lengths
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const ENEMY_SIZE: f32 = 20.0;

    /// Enemy speed = BASE + difficulty * PER_DIFFICULTY
    pub const ENEMY_BASE_SPEED: f32 = 1.0;
    pub const ENEMY_SPEED_PER_DIFFICULTY: f32 = 0.5;

    /// Difficulty at session start and added per survived tick
    pub const INITIAL_DIFFICULTY: f32 = 1.0;
    pub const DIFFICULTY_STEP: f32 = 0.001;

    /// Spawn interval (ms) = max(MIN, BASE - difficulty * PER_DIFFICULTY)
    pub const SPAWN_INTERVAL_BASE: f64 = 1000.0;
    pub const SPAWN_INTERVAL_PER_DIFFICULTY: f64 = 100.0;
    pub const SPAWN_INTERVAL_MIN: f64 = 200.0;

    /// Leaderboard capacity
    pub const MAX_LEADERBOARD_LEN: usize = 100;

    /// Storage keys
    pub const HIGH_SCORE_KEY: &str = "highScore";
    pub const LEADERBOARD_KEY: &str = "leaderboard";
    pub const SETTINGS_KEY: &str = "squareDodgeSettings";
}
