//! Collision tests and responses for axis-aligned rectangles
//!
//! The ball and paddles are rectangles; the walls are the top and bottom
//! edges of the playfield. Reflections only ever change the direction,
//! never the position.

use std::f32::consts::PI;

use glam::Vec2;

use super::state::{Ball, Bounds, Paddle, Side};
use crate::tuning::Tuning;
use crate::unit_from_angle;

/// Whether a ball at `candidate` touches or crosses the top or bottom wall
#[inline]
pub fn hits_wall(candidate: Vec2, ball: &Ball, bounds: &Bounds) -> bool {
    candidate.y <= 0.0 || candidate.y + ball.size.y >= bounds.height
}

/// Mirror a direction across the horizontal axis
///
/// Rebuilt from the negated angle so the result stays unit length.
#[inline]
pub fn reflect_off_wall(vel: Vec2) -> Vec2 {
    let angle = vel.y.atan2(vel.x);
    unit_from_angle(-angle)
}

/// Which paddle, if any, a ball at `candidate` is touching.
///
/// The vertical overlap uses the ball's current span, not the candidate's.
/// When both tests pass the half of the field the candidate is in decides.
pub fn paddle_contact(
    candidate: Vec2,
    ball: &Ball,
    left: &Paddle,
    right: &Paddle,
    bounds: &Bounds,
) -> Option<Side> {
    let left_hit = candidate.x <= left.right() && left.spans_overlap(ball);
    let right_hit = candidate.x + ball.size.x >= right.pos.x && right.spans_overlap(ball);

    if !(left_hit || right_hit) {
        return None;
    }
    if candidate.x < bounds.width / 2.0 {
        Some(Side::Left)
    } else {
        Some(Side::Right)
    }
}

/// Hit offset from the paddle center, -1 at the bottom edge and +1 at the top.
///
/// Exceeds ±1 when the ball only clips the paddle's corner.
#[inline]
pub fn hit_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    (paddle.center_y() - ball.center_y()) / (paddle.size.y / 2.0)
}

/// Skew angle for a hit at `offset`, never smaller in magnitude than `π / min_skew_angle`.
///
/// A dead-center hit (offset exactly 0 or -0) skews positively.
pub fn bounce_angle(offset: f32, tuning: &Tuning) -> f32 {
    let angle = offset * tuning.max_skew();
    let floor = tuning.min_skew();
    if angle.abs() >= floor {
        angle
    } else if angle < 0.0 {
        -floor
    } else {
        floor
    }
}

/// New direction after a paddle hit: mirror `incoming_angle` horizontally, then skew
#[inline]
pub fn reflect_off_paddle(incoming_angle: f32, skew: f32) -> Vec2 {
    unit_from_angle(PI - incoming_angle - skew)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_off_wall_flips_y_only() {
        let vel = Vec2::new(0.6, 0.8);
        let out = reflect_off_wall(vel);
        assert!((out.x - 0.6).abs() < 1e-5);
        assert!((out.y + 0.8).abs() < 1e-5);
        assert!((out.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_hits_wall_is_inclusive() {
        let bounds = Bounds::default();
        let ball = Ball::default();
        assert!(hits_wall(Vec2::new(100.0, 0.0), &ball, &bounds));
        assert!(hits_wall(Vec2::new(100.0, 584.0), &ball, &bounds));
        assert!(!hits_wall(Vec2::new(100.0, 0.1), &ball, &bounds));
        assert!(!hits_wall(Vec2::new(100.0, 583.9), &ball, &bounds));
    }

    #[test]
    fn test_bounce_angle_floor_at_zero_offset() {
        let tuning = Tuning::default();
        assert_eq!(bounce_angle(0.0, &tuning), tuning.min_skew());
        assert_eq!(bounce_angle(-0.0, &tuning), tuning.min_skew());
        assert_eq!(bounce_angle(-0.01, &tuning), -tuning.min_skew());
        assert_eq!(bounce_angle(0.01, &tuning), tuning.min_skew());
    }

    #[test]
    fn test_bounce_angle_scales_above_floor() {
        let tuning = Tuning::default();
        assert!((bounce_angle(1.0, &tuning) - PI / 4.0).abs() < 1e-6);
        assert!((bounce_angle(-0.5, &tuning) + PI / 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_off_paddle_reverses_x() {
        let out = reflect_off_paddle(PI, PI / 12.0);
        assert!(out.x > 0.0);
        assert!((out.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_contact_sides() {
        let bounds = Bounds::default();
        let left = Paddle::for_side(Side::Left, &bounds);
        let right = Paddle::for_side(Side::Right, &bounds);
        let mut ball = Ball::default();
        ball.pos = Vec2::new(100.0, 292.0);

        assert_eq!(
            paddle_contact(Vec2::new(58.0, 292.0), &ball, &left, &right, &bounds),
            Some(Side::Left)
        );
        assert_eq!(
            paddle_contact(Vec2::new(726.0, 292.0), &ball, &left, &right, &bounds),
            Some(Side::Right)
        );
        assert_eq!(
            paddle_contact(Vec2::new(300.0, 292.0), &ball, &left, &right, &bounds),
            None
        );

        // Far from either paddle vertically
        ball.pos.y = 10.0;
        assert_eq!(
            paddle_contact(Vec2::new(40.0, 10.0), &ball, &left, &right, &bounds),
            None
        );
    }

    #[test]
    fn test_hit_offset_sign() {
        let bounds = Bounds::default();
        let paddle = Paddle::for_side(Side::Left, &bounds);
        let mut ball = Ball::default();
        ball.pos.y = paddle.top() - 8.0;
        assert!((hit_offset(&ball, &paddle) - 1.0).abs() < 1e-6);
        ball.pos.y = paddle.center_y() - 8.0;
        assert_eq!(hit_offset(&ball, &paddle), 0.0);
    }
}
