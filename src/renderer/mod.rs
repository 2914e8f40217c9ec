//! Render-facing output
//!
//! The engine does not draw. Each frame it hands a drawing backend three
//! integer rectangles plus the fixed center-line layout.

pub mod shapes;

pub use shapes::{Rect, RenderState, center_line};
