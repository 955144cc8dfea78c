//! Frame pacing for the host loop.

use std::time::{Duration, Instant};

/// Longest frame delta handed to the simulation, in seconds.
///
/// A terminal that was suspended (Ctrl+Z, a laptop lid) would otherwise
/// report one enormous delta and drop every letter straight through the
/// ground.
pub const MAX_FRAME_DT: f32 = 0.25;

/// Measures per-frame elapsed time and how long to wait for input.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    pub fn starting_at(fps: u32, now: Instant) -> Self {
        let fps = fps.max(1);
        Self {
            frame: Duration::from_secs(1) / fps,
            last: now,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Seconds since the previous tick, capped at [`MAX_FRAME_DT`].
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.min(MAX_FRAME_DT)
    }

    /// Time left until the next frame is due.
    pub fn timeout(&self) -> Duration {
        self.timeout_at(Instant::now())
    }

    pub fn timeout_at(&self, now: Instant) -> Duration {
        self.frame
            .saturating_sub(now.saturating_duration_since(self.last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_elapsed_seconds() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(60, start);
        let dt = clock.tick_at(start + Duration::from_millis(20));
        assert!((dt - 0.02).abs() < 1e-4);
    }

    #[test]
    fn tick_caps_long_gaps() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(60, start);
        assert_eq!(clock.tick_at(start + Duration::from_secs(5)), MAX_FRAME_DT);
    }

    #[test]
    fn timeout_counts_down_to_zero() {
        let start = Instant::now();
        let clock = FrameClock::starting_at(50, start);
        assert_eq!(clock.frame_duration(), Duration::from_millis(20));
        assert_eq!(
            clock.timeout_at(start + Duration::from_millis(5)),
            Duration::from_millis(15)
        );
        assert_eq!(
            clock.timeout_at(start + Duration::from_millis(50)),
            Duration::ZERO
        );
    }

    #[test]
    fn zero_fps_is_treated_as_one() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.frame_duration(), Duration::from_secs(1));
    }
}
