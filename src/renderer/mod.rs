//! 2D rendering module
//!
//! Everything is a rectangle: the border is stroked, the player and enemies
//! are filled squares centered on their positions.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod commands;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use commands::{DrawCommand, DrawList};

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::SessionState;

/// Minimal 2D drawing surface
pub trait DrawTarget {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str, line_width: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);
}

/// Fill a square of edge `size` centered on `center`
fn fill_square(target: &mut impl DrawTarget, center: Vec2, size: f32, color: &str) {
    let half = size / 2.0;
    target.fill_rect(
        (center.x - half) as f64,
        (center.y - half) as f64,
        size as f64,
        size as f64,
        color,
    );
}

/// Draw one frame: clear, border, player, enemies
pub fn draw_frame(target: &mut impl DrawTarget, state: &SessionState, settings: &Settings) {
    let width = state.field.width as f64;
    let height = state.field.height as f64;
    let palette = settings.palette;

    target.clear_rect(0.0, 0.0, width, height);
    target.stroke_rect(
        0.0,
        0.0,
        width,
        height,
        palette.border_color(),
        settings.border_width,
    );

    fill_square(target, state.player.pos, state.player.size, palette.player_color());
    for enemy in &state.enemies {
        fill_square(target, enemy.pos, enemy.size, palette.enemy_color());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Enemy, Field};
    use crate::tuning::Tuning;

    #[test]
    fn test_draw_order_and_geometry() {
        let mut state = SessionState::new(1, Field::new(200.0, 100.0), Tuning::default());
        state.enemies.push(Enemy {
            pos: Vec2::new(-20.0, 50.0),
            vel: Vec2::ZERO,
            size: 20.0,
        });

        let mut list = DrawList::default();
        draw_frame(&mut list, &state, &Settings::default());

        assert_eq!(
            list.commands,
            vec![
                DrawCommand::Clear {
                    x: 0.0,
                    y: 0.0,
                    width: 200.0,
                    height: 100.0
                },
                DrawCommand::Stroke {
                    x: 0.0,
                    y: 0.0,
                    width: 200.0,
                    height: 100.0,
                    color: "white".to_string(),
                    line_width: 2.0
                },
                DrawCommand::Fill {
                    x: 90.0,
                    y: 40.0,
                    width: 20.0,
                    height: 20.0,
                    color: "white".to_string()
                },
                DrawCommand::Fill {
                    x: -30.0,
                    y: 40.0,
                    width: 20.0,
                    height: 20.0,
                    color: "red".to_string()
                },
            ]
        );
    }
}
