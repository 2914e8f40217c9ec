//! Physics tuning values
//!
//! Everything the collision resolver multiplies or divides by lives here so
//! tests and config files can inject alternate values.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Data-driven physics balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ball speed (pixels/second), applied to the unit direction
    pub ball_speed: f32,
    /// Paddle speed (pixels/second)
    pub paddle_speed: f32,
    /// Radian denominator for the largest paddle skew: π / max_skew_angle at the paddle edge
    pub max_skew_angle: f32,
    /// Radian denominator for the smallest paddle skew: π / min_skew_angle
    pub min_skew_angle: f32,
    /// Depth (pixels) from each side wall at which the ball counts as gone
    pub goal_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_speed: 400.0,
            paddle_speed: 400.0,
            max_skew_angle: 4.0,
            min_skew_angle: 12.0,
            goal_margin: 10.0,
        }
    }
}

impl Tuning {
    /// Largest skew (radians) a paddle edge hit produces
    #[inline]
    pub fn max_skew(&self) -> f32 {
        PI / self.max_skew_angle
    }

    /// Smallest skew (radians) any paddle hit produces
    #[inline]
    pub fn min_skew(&self) -> f32 {
        PI / self.min_skew_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skew_bounds() {
        let tuning = Tuning::default();
        assert!((tuning.max_skew() - PI / 4.0).abs() < 1e-6);
        assert!((tuning.min_skew() - PI / 12.0).abs() < 1e-6);
        assert!(tuning.min_skew() < tuning.max_skew());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "ball_speed": 250.0 }"#).unwrap();
        assert_eq!(tuning.ball_speed, 250.0);
        assert_eq!(tuning.goal_margin, Tuning::default().goal_margin);
    }
}
