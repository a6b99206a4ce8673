//! Enemy spawning
//!
//! Enemies appear one `size` outside a random field edge and drift inward.
//! Only the axis perpendicular to the entry edge is biased toward the field;
//! the parallel axis may go either way.

use glam::Vec2;
use rand::Rng;

use super::state::{Edge, Enemy, Field};
use crate::tuning::Tuning;

/// Whether enough time has passed since the last spawn
#[inline]
pub fn spawn_due(now: f64, last_spawn_time: f64, spawn_interval: f64) -> bool {
    now - last_spawn_time > spawn_interval
}

/// Pick an entry edge uniformly at random
pub fn random_edge<R: Rng>(rng: &mut R) -> Edge {
    Edge::ALL[rng.random_range(0..Edge::ALL.len())]
}

/// Create one enemy entering from a random edge
pub fn spawn_enemy<R: Rng>(rng: &mut R, difficulty: f32, field: &Field, tuning: &Tuning) -> Enemy {
    let edge = random_edge(rng);
    spawn_enemy_at(rng, edge, difficulty, field, tuning)
}

/// Create one enemy entering from `edge`
pub fn spawn_enemy_at<R: Rng>(
    rng: &mut R,
    edge: Edge,
    difficulty: f32,
    field: &Field,
    tuning: &Tuning,
) -> Enemy {
    let size = tuning.enemy_size;
    let speed = tuning.enemy_speed(difficulty);

    // Inward: [0, speed). Along the edge: [-speed, speed).
    let inward = rng.random::<f32>() * speed;
    let along = rng.random::<f32>() * speed * 2.0 - speed;

    let (pos, vel) = match edge {
        Edge::Top => (
            Vec2::new(rng.random::<f32>() * field.width, -size),
            Vec2::new(along, inward),
        ),
        Edge::Right => (
            Vec2::new(field.width + size, rng.random::<f32>() * field.height),
            Vec2::new(-inward, along),
        ),
        Edge::Bottom => (
            Vec2::new(rng.random::<f32>() * field.width, field.height + size),
            Vec2::new(along, -inward),
        ),
        Edge::Left => (
            Vec2::new(-size, rng.random::<f32>() * field.height),
            Vec2::new(inward, along),
        ),
    };

    log::debug!("spawn {:?} at ({:.1}, {:.1})", edge, pos.x, pos.y);

    Enemy { pos, vel, size }
}
