//! Runtime settings
//!
//! Loaded from an optional JSON file at startup. A missing file means
//! defaults; a file that exists but cannot be read or parsed is an
//! initialization failure and the process stops before the first frame.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::FPS;
use crate::tuning::Tuning;

/// Reasons the boundary layer can fail to start
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// Settings file exists but could not be read
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    /// Settings file is not valid JSON for `Settings`
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// Settings parsed but hold values the engine cannot run with
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Highest frame rate a millisecond tick source can pace
pub const MAX_TARGET_FPS: u32 = 1000;

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame rate the pacing delay aims for
    pub target_fps: u32,
    /// RNG seed; random when absent
    pub seed: Option<u64>,
    /// Let both paddles track the ball on their own
    pub demo_mode: bool,
    /// Simulated seconds the headless demo runs for
    pub demo_seconds: f32,
    /// Physics tuning
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: FPS,
            seed: None,
            demo_mode: true,
            demo_seconds: 30.0,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, InitError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, InitError> {
        if !path.exists() {
            log::warn!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Frame interval in milliseconds for `target_fps`, never below 1
    pub fn frame_target_ms(&self) -> u32 {
        (1000 / self.target_fps.max(1)).max(1)
    }

    fn validate(&self) -> Result<(), InitError> {
        let t = &self.tuning;
        if self.target_fps == 0 || self.target_fps > MAX_TARGET_FPS {
            return Err(InitError::Invalid(format!(
                "target_fps must be in 1..={MAX_TARGET_FPS}"
            )));
        }
        if !(t.ball_speed.is_finite() && t.ball_speed > 0.0) {
            return Err(InitError::Invalid("ball_speed must be positive".into()));
        }
        if !(t.paddle_speed.is_finite() && t.paddle_speed >= 0.0) {
            return Err(InitError::Invalid("paddle_speed must not be negative".into()));
        }
        if !(t.max_skew_angle > 0.0 && t.min_skew_angle > 0.0) {
            return Err(InitError::Invalid("skew angle denominators must be positive".into()));
        }
        if t.goal_margin.is_nan() || t.goal_margin < 0.0 {
            return Err(InitError::Invalid("goal_margin must not be negative".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.target_fps, 60);
        assert_eq!(settings.frame_target_ms(), 16);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_from_json_partial() {
        let settings =
            Settings::from_json(r#"{ "seed": 7, "tuning": { "goal_margin": 4.0 } }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.tuning.goal_margin, 4.0);
        assert_eq!(settings.tuning.ball_speed, Tuning::default().ball_speed);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Settings::from_json("not json"),
            Err(InitError::Parse(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_zero_fps() {
        assert!(matches!(
            Settings::from_json(r#"{ "target_fps": 0 }"#),
            Err(InitError::Invalid(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_sub_millisecond_frames() {
        assert!(matches!(
            Settings::from_json(r#"{ "target_fps": 2000 }"#),
            Err(InitError::Invalid(_))
        ));
        let settings = Settings::from_json(r#"{ "target_fps": 1000 }"#).unwrap();
        assert_eq!(settings.frame_target_ms(), 1);
    }

    #[test]
    fn test_frame_target_never_zero() {
        // Built directly, bypassing validation
        let settings = Settings {
            target_fps: 5000,
            ..Default::default()
        };
        assert_eq!(settings.frame_target_ms(), 1);
    }

    #[test]
    fn test_error_messages() {
        let err = Settings::from_json("not json").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse settings"));
        assert!(std::error::Error::source(&err).is_some());
        let err = Settings::from_json(r#"{ "target_fps": 0 }"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid settings"));
    }

    #[test]
    fn test_round_trip_json() {
        let mut settings = Settings::default();
        settings.seed = Some(42);
        let parsed = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(parsed.seed, Some(42));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/rally-pong.json")).unwrap();
        assert_eq!(settings.target_fps, FPS);
    }
}
