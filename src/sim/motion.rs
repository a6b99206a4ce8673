//! Enemy motion
//!
//! One tick is one unit of game time: `pos += vel`.

use super::state::{Enemy, Field};

/// Advance every enemy and drop the ones that left the field by more than
/// their own size
pub fn move_enemies(enemies: &mut Vec<Enemy>, field: &Field) {
    enemies.retain_mut(|enemy| {
        enemy.pos += enemy.vel;
        field.contains_with_margin(enemy.pos, enemy.size)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn enemy(x: f32, y: f32, vx: f32, vy: f32) -> Enemy {
        Enemy {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            size: 20.0,
        }
    }

    #[test]
    fn test_enemies_advance_by_velocity() {
        let field = Field::new(800.0, 600.0);
        let mut enemies = vec![enemy(100.0, 100.0, 1.5, -0.5)];
        move_enemies(&mut enemies, &field);
        assert_eq!(enemies[0].pos, Vec2::new(101.5, 99.5));
    }

    #[test]
    fn test_enemy_on_margin_survives() {
        let field = Field::new(800.0, 600.0);
        // Spawned on the top margin moving sideways only
        let mut enemies = vec![enemy(400.0, -20.0, 1.0, 0.0)];
        move_enemies(&mut enemies, &field);
        assert_eq!(enemies.len(), 1);
    }

    #[test]
    fn test_enemies_past_margin_are_removed() {
        let field = Field::new(800.0, 600.0);
        let mut enemies = vec![
            enemy(-19.5, 300.0, -1.0, 0.0),
            enemy(819.5, 300.0, 1.0, 0.0),
            enemy(400.0, -19.5, 0.0, -1.0),
            enemy(400.0, 619.5, 0.0, 1.0),
            enemy(400.0, 300.0, 1.0, 1.0),
        ];
        move_enemies(&mut enemies, &field);
        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].pos, Vec2::new(401.0, 301.0));
    }
}
