//! Spawn cadence control.
//!
//! Letters appear on a timer that tightens after every spawn, down to a floor.

use crate::types::GameConfig;

/// Sanitize a frame delta: negative and non-finite values become zero.
///
/// The simulation never runs time backwards, so a bogus delta from the host
/// loop must not rewind timers or lift letters back above the ground.
#[inline]
pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

/// Decides when the next letter should appear.
///
/// Invariants:
/// - `current_interval() >= min_interval()` at all times
/// - `elapsed()` is reset to zero on every trigger
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnController {
    current_interval: f32,
    min_interval: f32,
    decay: f32,
    elapsed: f32,
}

impl SpawnController {
    /// Create a controller starting at `interval`, shrinking by `decay` per
    /// spawn and never going below `min_interval`.
    pub fn new(interval: f32, min_interval: f32, decay: f32) -> Self {
        Self {
            current_interval: interval.max(min_interval),
            min_interval,
            decay: decay.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.spawn_interval,
            config.min_spawn_interval,
            config.spawn_decay,
        )
    }

    /// Advance the timer by `dt` seconds.
    ///
    /// Returns `true` when exactly one letter should be spawned. On a trigger
    /// the elapsed time restarts from zero (any overshoot is discarded) and the
    /// interval tightens by one decay step.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += clamp_dt(dt);
        if self.elapsed < self.current_interval {
            return false;
        }

        self.elapsed = 0.0;
        self.current_interval = (self.current_interval - self.decay).max(self.min_interval);
        true
    }

    pub fn current_interval(&self) -> f32 {
        self.current_interval
    }

    pub fn min_interval(&self) -> f32 {
        self.min_interval
    }

    pub fn decay(&self) -> f32 {
        self.decay
    }

    /// Seconds accumulated since the last spawn.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl Default for SpawnController {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
