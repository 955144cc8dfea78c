//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (core simulation, terminal rendering, input mapping, tests).
//!
//! # Playfield
//!
//! The simulation works in abstract "pixel" units on a fixed viewport. The
//! terminal front-end scales this space down to whatever the terminal offers.
//!
//! - **Width**: 960 units
//! - **Height**: 540 units
//! - **Ground line**: 88 units above the bottom edge (y = 452)
//!
//! # Gameplay Tuning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `START_SPEED` | 120.0 | Fall speed at the start of a round (units/s) |
//! | `MAX_SPEED` | 600.0 | Fall speed cap |
//! | `SPEED_INCREMENT` | 4.0 | Added to the fall speed on every hit |
//! | `SPAWN_INTERVAL` | 1.2 | Seconds between spawns at the start of a round |
//! | `MIN_SPAWN_INTERVAL` | 0.35 | Spawn interval floor |
//! | `SPAWN_DECAY` | 0.02 | Interval reduction after every spawn |
//! | `SPAWN_MARGIN` | 40.0 | Horizontal keep-out band at both edges |
//! | `SPAWN_Y` | -30.0 | Spawn height (just above the visible top edge) |
//!
//! # Examples
//!
//! ```
//! use keyboard_jump_types::{GameConfig, Key, ALPHABET};
//!
//! let config = GameConfig::default();
//! assert_eq!(config.ground_y(), 452.0);
//! assert!(config.validate().is_ok());
//!
//! // Keys normalize to lowercase letters
//! assert_eq!(Key::Char('Q').letter(), Some('q'));
//! assert_eq!(Key::Char('7').letter(), None);
//!
//! assert_eq!(ALPHABET.len(), 26);
//! ```

pub mod config;

pub use config::{ConfigError, GameConfig};

/// Simulation viewport width in units
pub const VIEWPORT_WIDTH: f32 = 960.0;

/// Simulation viewport height in units
pub const VIEWPORT_HEIGHT: f32 = 540.0;

/// Distance of the ground line from the bottom edge
pub const GROUND_OFFSET: f32 = 88.0;

/// Fall speed at the start of every round (units per second)
pub const START_SPEED: f32 = 120.0;

/// Fall speed cap (units per second)
pub const MAX_SPEED: f32 = 600.0;

/// Fall speed added for every correct key
pub const SPEED_INCREMENT: f32 = 4.0;

/// Seconds between spawns at the start of a round
pub const SPAWN_INTERVAL: f32 = 1.2;

/// Lower bound for the spawn interval
pub const MIN_SPAWN_INTERVAL: f32 = 0.35;

/// Spawn interval reduction applied after every spawn
pub const SPAWN_DECAY: f32 = 0.02;

/// Horizontal keep-out margin for spawned letters
pub const SPAWN_MARGIN: f32 = 40.0;

/// Vertical spawn position (negative = above the visible top edge)
pub const SPAWN_Y: f32 = -30.0;

/// Default host loop frame rate
pub const TARGET_FPS: u32 = 60;

/// The letters that can fall, in order.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// A falling letter.
///
/// `x` is fixed at spawn; only `y` changes while the letter falls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letter {
    pub ch: char,
    pub x: f32,
    pub y: f32,
}

impl Letter {
    pub fn new(ch: char, x: f32, y: f32) -> Self {
        Self { ch, x, y }
    }

    /// True once the letter has reached or passed `ground_y`.
    pub fn has_landed(&self, ground_y: f32) -> bool {
        self.y >= ground_y
    }
}

/// A key press as seen by the simulation.
///
/// The input layer resolves raw terminal events into this shape so the core
/// never has to know about a particular input backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape / window close / Ctrl+C
    Quit,
    /// A printable character, case preserved
    Char(char),
    /// Anything else (arrows, function keys, ...)
    Other,
}

impl Key {
    /// The lowercase letter this key types, if it types one.
    ///
    /// Only ASCII letters count; digits, punctuation and non-ASCII
    /// characters return `None`.
    pub fn letter(&self) -> Option<char> {
        match *self {
            Key::Char(c) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
            _ => None,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Key::Quit)
    }
}

/// High-level lifecycle of a game session.
///
/// `Terminated` is absorbing: nothing leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Active,
    GameOver,
    Terminated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_values() {
        assert_eq!(VIEWPORT_WIDTH, 960.0);
        assert_eq!(VIEWPORT_HEIGHT, 540.0);
        assert_eq!(VIEWPORT_HEIGHT - GROUND_OFFSET, 452.0);
        assert_eq!(START_SPEED, 120.0);
        assert_eq!(MAX_SPEED, 600.0);
        assert_eq!(SPEED_INCREMENT, 4.0);
        assert_eq!(SPAWN_INTERVAL, 1.2);
        assert_eq!(MIN_SPAWN_INTERVAL, 0.35);
        assert_eq!(SPAWN_DECAY, 0.02);
        assert_eq!(SPAWN_MARGIN, 40.0);
        assert_eq!(SPAWN_Y, -30.0);
    }

    #[test]
    fn alphabet_is_lowercase_ascii() {
        assert!(ALPHABET.iter().all(|c| c.is_ascii_lowercase()));
        assert_eq!(ALPHABET[0], 'a');
        assert_eq!(ALPHABET[25], 'z');
    }

    #[test]
    fn key_letter_normalizes_case() {
        assert_eq!(Key::Char('a').letter(), Some('a'));
        assert_eq!(Key::Char('Z').letter(), Some('z'));
    }

    #[test]
    fn key_letter_rejects_non_letters() {
        assert_eq!(Key::Char('1').letter(), None);
        assert_eq!(Key::Char(' ').letter(), None);
        assert_eq!(Key::Char('é').letter(), None);
        assert_eq!(Key::Quit.letter(), None);
        assert_eq!(Key::Other.letter(), None);
    }

    #[test]
    fn letter_lands_at_or_below_ground() {
        let ground = 452.0;
        assert!(!Letter::new('a', 100.0, 451.9).has_landed(ground));
        assert!(Letter::new('a', 100.0, 452.0).has_landed(ground));
        assert!(Letter::new('a', 100.0, 500.0).has_landed(ground));
    }
}
