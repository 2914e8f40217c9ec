//! Frame pacing from a millisecond tick source

/// Turns monotonic millisecond ticks into frame deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame_ms: u32,
    target_ms: u32,
}

impl FrameClock {
    pub fn new(now_ms: u32, target_ms: u32) -> Self {
        Self {
            last_frame_ms: now_ms,
            target_ms,
        }
    }

    /// How long to sleep before simulating, if the frame finished early.
    ///
    /// Only waits in (0, target]; a tick source that jumped backwards or a
    /// frame that already overran gets no wait.
    pub fn time_to_wait(&self, now_ms: u32) -> Option<u32> {
        let elapsed = now_ms.wrapping_sub(self.last_frame_ms) as i64;
        let wait = self.target_ms as i64 - elapsed;
        if wait > 0 && wait <= self.target_ms as i64 {
            Some(wait as u32)
        } else {
            None
        }
    }

    /// Seconds since the previous frame; marks `now_ms` as the new frame start.
    ///
    /// No upper bound: a stalled frame yields a large `dt`.
    pub fn tick(&mut self, now_ms: u32) -> f32 {
        let elapsed = now_ms.wrapping_sub(self.last_frame_ms);
        self.last_frame_ms = now_ms;
        elapsed as f32 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_out_short_frames() {
        let clock = FrameClock::new(1000, 16);
        assert_eq!(clock.time_to_wait(1000), Some(16));
        assert_eq!(clock.time_to_wait(1010), Some(6));
        assert_eq!(clock.time_to_wait(1016), None);
        assert_eq!(clock.time_to_wait(1100), None);
    }

    #[test]
    fn test_tick_reports_seconds() {
        let mut clock = FrameClock::new(0, 16);
        assert!((clock.tick(16) - 0.016).abs() < 1e-6);
        assert!((clock.tick(1016) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_stalled_frame_is_not_clamped() {
        let mut clock = FrameClock::new(0, 16);
        assert!((clock.tick(5000) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_tick_survives_wraparound() {
        let mut clock = FrameClock::new(u32::MAX - 5, 16);
        assert!((clock.tick(10) - 0.016).abs() < 1e-6);
    }
}
