//! Gameplay configuration.
//!
//! Every tunable lives in one [`GameConfig`] value that is handed to the
//! simulation at construction, so several independent games can run side by
//! side (tests do this constantly).

use thiserror::Error;

use crate::{
    GROUND_OFFSET, MAX_SPEED, MIN_SPAWN_INTERVAL, SPAWN_DECAY, SPAWN_INTERVAL, SPAWN_MARGIN,
    SPAWN_Y, SPEED_INCREMENT, START_SPEED, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("viewport must be positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("ground offset {offset} puts the ground outside a viewport of height {height}")]
    GroundOutsideViewport { offset: f32, height: f32 },

    #[error("start speed {start} must be positive and not exceed max speed {max}")]
    InvalidSpeedRange { start: f32, max: f32 },

    #[error("speed increment must be non-negative, got {0}")]
    NegativeSpeedIncrement(f32),

    #[error("spawn intervals must be positive (interval {interval}, min {min})")]
    NonPositiveInterval { interval: f32, min: f32 },

    #[error("min spawn interval {min} exceeds the starting interval {interval}")]
    MinIntervalAboveStart { interval: f32, min: f32 },

    #[error("spawn decay must be non-negative, got {0}")]
    NegativeDecay(f32),

    #[error("spawn margin {margin} leaves no room in a viewport of width {width}")]
    MarginTooWide { margin: f32, width: f32 },
}

/// Gameplay tuning for one simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Distance of the ground line from the bottom edge.
    pub ground_offset: f32,
    pub start_speed: f32,
    pub max_speed: f32,
    pub speed_increment: f32,
    /// Initial seconds between spawns.
    pub spawn_interval: f32,
    pub min_spawn_interval: f32,
    pub spawn_decay: f32,
    pub spawn_margin: f32,
    pub spawn_y: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            ground_offset: GROUND_OFFSET,
            start_speed: START_SPEED,
            max_speed: MAX_SPEED,
            speed_increment: SPEED_INCREMENT,
            spawn_interval: SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            spawn_decay: SPAWN_DECAY,
            spawn_margin: SPAWN_MARGIN,
            spawn_y: SPAWN_Y,
        }
    }
}

impl GameConfig {
    /// Vertical position of the ground line.
    pub fn ground_y(&self) -> f32 {
        self.viewport_height - self.ground_offset
    }

    /// Horizontal band `[lo, hi]` that spawned letters are placed in.
    pub fn spawn_band(&self) -> (f32, f32) {
        (self.spawn_margin, self.viewport_width - self.spawn_margin)
    }

    /// Check the configuration for values the simulation cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }

        if !(self.ground_offset >= 0.0 && self.ground_offset < self.viewport_height) {
            return Err(ConfigError::GroundOutsideViewport {
                offset: self.ground_offset,
                height: self.viewport_height,
            });
        }

        if !(self.start_speed > 0.0 && self.start_speed <= self.max_speed) {
            return Err(ConfigError::InvalidSpeedRange {
                start: self.start_speed,
                max: self.max_speed,
            });
        }

        if !(self.speed_increment >= 0.0) {
            return Err(ConfigError::NegativeSpeedIncrement(self.speed_increment));
        }

        if !(self.spawn_interval > 0.0 && self.min_spawn_interval > 0.0) {
            return Err(ConfigError::NonPositiveInterval {
                interval: self.spawn_interval,
                min: self.min_spawn_interval,
            });
        }

        if self.min_spawn_interval > self.spawn_interval {
            return Err(ConfigError::MinIntervalAboveStart {
                interval: self.spawn_interval,
                min: self.min_spawn_interval,
            });
        }

        if !(self.spawn_decay >= 0.0) {
            return Err(ConfigError::NegativeDecay(self.spawn_decay));
        }

        let (lo, hi) = self.spawn_band();
        if !(self.spawn_margin >= 0.0 && lo <= hi) {
            return Err(ConfigError::MarginTooWide {
                margin: self.spawn_margin,
                width: self.viewport_width,
            });
        }

        Ok(())
    }
}
