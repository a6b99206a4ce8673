//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, timestamps supplied by the caller
//! - Seeded RNG only
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{player_hit, squares_collide};
pub use difficulty::spawn_interval;
pub use motion::move_enemies;
pub use spawn::{spawn_due, spawn_enemy, spawn_enemy_at};
pub use state::{Edge, Enemy, Field, GamePhase, Player, SessionState};
pub use tick::{TickInput, TickOutcome, apply_input, tick};
