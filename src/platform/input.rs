//! Pointer/touch mapping and canvas sizing

use glam::Vec2;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::Field;

/// Displayed canvas rectangle in client space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Map a client-space pointer position onto the play field.
///
/// `scroll` is the document scroll offset, subtracted like the rect origin.
/// A zero-sized rect maps to the field origin.
pub fn pointer_to_field(client: Vec2, rect: ClientRect, scroll: Vec2, field: &Field) -> Vec2 {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Vec2::ZERO;
    }
    let local = client - Vec2::new(rect.left, rect.top) - scroll;
    Vec2::new(
        local.x / rect.width * field.width,
        local.y / rect.height * field.height,
    )
}

/// Canvas size for a container width, keeping the reference aspect ratio
pub fn fit_to_container(container_width: u32) -> (u32, u32) {
    let height = (container_width as f32 * (FIELD_HEIGHT / FIELD_WIDTH)) as u32;
    (container_width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_scales_to_field() {
        let field = Field::new(800.0, 600.0);
        let rect = ClientRect {
            left: 10.0,
            top: 20.0,
            width: 400.0,
            height: 300.0,
        };
        let pos = pointer_to_field(Vec2::new(210.0, 170.0), rect, Vec2::ZERO, &field);
        assert_eq!(pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_scroll_offset_is_subtracted() {
        let field = Field::new(800.0, 600.0);
        let rect = ClientRect {
            left: 0.0,
            top: 0.0,
            width: 800.0,
            height: 600.0,
        };
        let pos = pointer_to_field(Vec2::new(100.0, 100.0), rect, Vec2::new(0.0, 50.0), &field);
        assert_eq!(pos, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_zero_rect() {
        let field = Field::new(800.0, 600.0);
        let rect = ClientRect {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
        };
        assert_eq!(pointer_to_field(Vec2::new(5.0, 5.0), rect, Vec2::ZERO, &field), Vec2::ZERO);
    }

    #[test]
    fn test_fit_keeps_aspect() {
        assert_eq!(fit_to_container(800), (800, 600));
        assert_eq!(fit_to_container(400), (400, 300));
        assert_eq!(fit_to_container(333), (333, 249));
    }
}
