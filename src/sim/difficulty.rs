//! Difficulty progression

use crate::tuning::Tuning;

/// Spawn interval (ms) for a difficulty level, floored at the tuning minimum
pub fn spawn_interval(difficulty: f32, tuning: &Tuning) -> f64 {
    let raw = tuning.spawn_interval_base - difficulty as f64 * tuning.spawn_interval_per_difficulty;
    raw.max(tuning.spawn_interval_min)
}

/// Apply one survived tick: raise difficulty, return the new spawn interval
pub fn advance(difficulty: &mut f32, tuning: &Tuning) -> f64 {
    *difficulty += tuning.difficulty_step;
    spawn_interval(*difficulty, tuning)
}
