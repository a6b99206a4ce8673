//! Recorded draw calls
//!
//! A [`DrawTarget`] that stores calls instead of painting them. Used by the
//! headless runner and by tests to inspect what a frame would draw.

use super::DrawTarget;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Stroke {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
        line_width: f64,
    },
    Fill {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
    },
}

/// Draw calls of the frames recorded since the last clear
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Number of filled rectangles (player + enemies) in the list
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { .. }))
            .count()
    }
}

impl DrawTarget for DrawList {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        // A clear starts a new frame
        self.commands.clear();
        self.commands.push(DrawCommand::Clear {
            x,
            y,
            width,
            height,
        });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str, line_width: f64) {
        self.commands.push(DrawCommand::Stroke {
            x,
            y,
            width,
            height,
            color: color.to_string(),
            line_width,
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.commands.push(DrawCommand::Fill {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }
}
