//! Session state and core simulation types
//!
//! Everything a tick reads or writes lives in [`SessionState`]; nothing in
//! the simulation touches browser globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player was hit; the session is reset before the next tick
    GameOver,
}

/// Logical play field, independent of on-screen pixel size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if `pos` lies within the field grown by `margin` on every side
    pub fn contains_with_margin(&self, pos: Vec2, margin: f32) -> bool {
        !(pos.x < -margin
            || pos.x > self.width + margin
            || pos.y < -margin
            || pos.y > self.height + margin)
    }

    /// Clamp a point onto the field
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        pos.clamp(Vec2::ZERO, Vec2::new(self.width, self.height))
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(crate::consts::FIELD_WIDTH, crate::consts::FIELD_HEIGHT)
    }
}

/// Field edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

/// The player's square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Hitbox center
    pub pos: Vec2,
    /// Hitbox edge length
    pub size: f32,
}

impl Player {
    pub fn new(field: &Field, size: f32) -> Self {
        Self {
            pos: field.center(),
            size,
        }
    }

    /// Move to a pointer position, kept inside the field
    pub fn set_position(&mut self, pos: Vec2, field: &Field) {
        self.pos = field.clamp(pos);
    }
}

/// An enemy square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Hitbox center
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    /// Hitbox edge length
    pub size: f32,
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Balance parameters
    pub tuning: Tuning,
    /// Play field the entities live in
    pub field: Field,
    /// Current phase
    pub phase: GamePhase,
    /// Player square
    pub player: Player,
    /// Active enemies (order irrelevant)
    pub enemies: Vec<Enemy>,
    /// Ticks survived this session
    pub score: u64,
    /// Never decreases within a session
    pub difficulty: f32,
    /// Minimum time between spawns (ms)
    pub spawn_interval: f64,
    /// Timestamp of the last spawn or of the first tick of the session (ms)
    pub last_spawn_time: Option<f64>,
    /// Completed sessions since construction
    pub sessions_played: u32,
    /// Session RNG, kept across resets
    pub rng: Pcg32,
}

impl SessionState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, field: Field, tuning: Tuning) -> Self {
        Self {
            player: Player::new(&field, tuning.player_size),
            field,
            phase: GamePhase::Running,
            enemies: Vec::new(),
            score: 0,
            difficulty: tuning.initial_difficulty,
            spawn_interval: tuning.spawn_interval_base,
            last_spawn_time: None,
            sessions_played: 0,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    /// Start a fresh session on the same field, keeping the RNG stream
    pub fn reset(&mut self) {
        self.phase = GamePhase::Running;
        self.player = Player::new(&self.field, self.tuning.player_size);
        self.enemies.clear();
        self.score = 0;
        self.difficulty = self.tuning.initial_difficulty;
        self.spawn_interval = self.tuning.spawn_interval_base;
        self.last_spawn_time = None;
        self.sessions_played += 1;
    }

    /// Adopt new play field dimensions (canvas resized)
    pub fn resize(&mut self, field: Field) {
        self.field = field;
        self.player.pos = field.clamp(self.player.pos);
    }
}
