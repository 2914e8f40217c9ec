//! Rectangles for a 2D backend

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CENTER_LINE_DOTS, CENTER_LINE_WIDTH};
use crate::sim::state::{Bounds, GameState};

/// Integer axis-aligned rectangle in pixels (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Truncate a float rectangle to whole pixels
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x as i32, pos.y as i32, size.x as i32, size.y as i32)
    }
}

/// Everything a backend needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderState {
    pub ball: Rect,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
}

impl RenderState {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            ball: Rect::from_pos_size(state.ball.pos, state.ball.size),
            left_paddle: Rect::from_pos_size(state.left.pos, state.left.size),
            right_paddle: Rect::from_pos_size(state.right.pos, state.right.size),
        }
    }
}

/// Dashes of the decorative center line, vertically centered in the field.
///
/// Each dash is half a pitch tall and dashes repeat every `height / dots`,
/// so the whole line spans `height - dash` and always fits inside the field.
pub fn center_line(bounds: &Bounds) -> Vec<Rect> {
    let dots = CENTER_LINE_DOTS as f32;
    let step = bounds.height / dots;
    let dot_height = step / 2.0;
    let total_height = (dots - 1.0) * step + dot_height;
    let start_y = (bounds.height - total_height) / 2.0;
    let x = (bounds.width / 2.0 - CENTER_LINE_WIDTH / 2.0) as i32;

    (0..CENTER_LINE_DOTS)
        .map(|i| {
            Rect::new(
                x,
                (start_y + i as f32 * step) as i32,
                CENTER_LINE_WIDTH as i32,
                dot_height as i32,
            )
        })
        .collect()
}
