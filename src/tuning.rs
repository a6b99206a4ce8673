//! Gameplay balance knobs
//!
//! Defaults come from [`crate::consts`]. Kept as data so alternative balance
//! profiles can be deserialized without touching the simulation.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance parameters read by every simulation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player hitbox edge length
    pub player_size: f32,
    /// Enemy hitbox edge length
    pub enemy_size: f32,
    /// Enemy speed at difficulty 0
    pub enemy_base_speed: f32,
    /// Enemy speed added per unit of difficulty
    pub enemy_speed_per_difficulty: f32,
    /// Difficulty at session start
    pub initial_difficulty: f32,
    /// Difficulty added per survived tick
    pub difficulty_step: f32,
    /// Spawn interval at difficulty 0 (ms)
    pub spawn_interval_base: f64,
    /// Spawn interval removed per unit of difficulty (ms)
    pub spawn_interval_per_difficulty: f64,
    /// Spawn interval floor (ms)
    pub spawn_interval_min: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            enemy_size: ENEMY_SIZE,
            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_speed_per_difficulty: ENEMY_SPEED_PER_DIFFICULTY,
            initial_difficulty: INITIAL_DIFFICULTY,
            difficulty_step: DIFFICULTY_STEP,
            spawn_interval_base: SPAWN_INTERVAL_BASE,
            spawn_interval_per_difficulty: SPAWN_INTERVAL_PER_DIFFICULTY,
            spawn_interval_min: SPAWN_INTERVAL_MIN,
        }
    }
}

impl Tuning {
    /// Base enemy speed for a difficulty level
    pub fn enemy_speed(&self, difficulty: f32) -> f32 {
        self.enemy_base_speed + difficulty * self.enemy_speed_per_difficulty
    }
}
