//! Player/enemy collision detection
//!
//! Squares are approximated by circles: two entities collide when their
//! centers are closer than the mean of their edge lengths. This is not an
//! AABB test; the effective hitbox is round and slightly smaller than the
//! drawn square.

use glam::Vec2;

use super::state::{Enemy, Player};

/// Check overlap between two square entities
#[inline]
pub fn squares_collide(a_pos: Vec2, a_size: f32, b_pos: Vec2, b_size: f32) -> bool {
    a_pos.distance(b_pos) < (a_size + b_size) / 2.0
}

/// Check whether any enemy touches the player
pub fn player_hit(player: &Player, enemies: &[Enemy]) -> bool {
    enemies
        .iter()
        .any(|enemy| squares_collide(player.pos, player.size, enemy.pos, enemy.size))
}
