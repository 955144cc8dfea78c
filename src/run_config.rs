//! Runtime options for the terminal binary.
//!
//! Gameplay tuning lives in [`crate::types::GameConfig`]; this is only about
//! how one run is hosted.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::TARGET_FPS;

/// Frame rate bounds accepted from the environment.
pub const MIN_FPS: u32 = 10;
pub const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Seed for the whole session.
    pub seed: u64,
    /// Disable the terminal bell.
    pub mute: bool,
    /// Append logs to this file; no logging when unset.
    pub log_path: Option<String>,
    pub fps: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: time_seed(),
            mute: false,
            log_path: None,
            fps: TARGET_FPS,
        }
    }
}

impl RunConfig {
    /// Create from environment variables
    ///
    /// - `KEYBOARD_JUMP_SEED`: session seed (default: derived from the clock)
    /// - `KEYBOARD_JUMP_MUTE`: `1`/`true` silences the bell
    /// - `KEYBOARD_JUMP_LOG`: log file path
    /// - `KEYBOARD_JUMP_FPS`: frame rate, clamped to 10..=240
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("KEYBOARD_JUMP_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let mute = lookup("KEYBOARD_JUMP_MUTE")
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false);

        let log_path = lookup("KEYBOARD_JUMP_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let fps = lookup("KEYBOARD_JUMP_FPS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|fps| fps.clamp(MIN_FPS, MAX_FPS))
            .unwrap_or(TARGET_FPS);

        Self {
            seed,
            mute,
            log_path,
            fps,
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
