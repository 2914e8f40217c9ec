//! Serve direction
//!
//! The ball always starts from the center and heads toward the serving
//! side's wall, inside the wedge spanned by the rays to that wall's two
//! corners.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, Bounds, Side};
use crate::{angle_between, normalize_angle, unit_from_angle};

/// Launch-angle interval `[lo, hi)` from `origin` toward `side`'s wall corners.
///
/// Both bounds are normalized to [0, 2π) first. When the interval would
/// span more than π it is the wrong way round the circle, so the bounds are
/// swapped and `hi` is lifted by 2π; `hi` may then exceed 2π.
pub fn serve_arc(origin: Vec2, side: Side, bounds: &Bounds) -> (f32, f32) {
    let wall_x = match side {
        Side::Left => 0.0,
        Side::Right => bounds.width,
    };
    let top = normalize_angle(angle_between(origin, Vec2::new(wall_x, 0.0)));
    let bottom = normalize_angle(angle_between(origin, Vec2::new(wall_x, bounds.height)));

    let lo = top.min(bottom);
    let hi = top.max(bottom);
    if hi - lo > PI { (hi, lo + TAU) } else { (lo, hi) }
}

/// Place the ball at center and give it a fresh unit direction toward `side`.
///
/// Returns the launch angle in [0, 2π).
pub fn serve(ball: &mut Ball, side: Side, bounds: &Bounds, rng: &mut impl Rng) -> f32 {
    ball.pos = bounds.center() - ball.size / 2.0;

    let (lo, hi) = serve_arc(ball.pos + ball.size / 2.0, side, bounds);
    let raw = if hi > lo { rng.random_range(lo..hi) } else { lo };
    let angle = normalize_angle(raw);

    ball.vel = unit_from_angle(angle);
    log::info!(
        "{side:?} serve at {angle:.3} rad, velocity ({:.3}, {:.3})",
        ball.vel.x,
        ball.vel.y
    );
    angle
}
