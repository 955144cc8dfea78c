//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the falling-letters simulation. It has **no
//! dependencies** on terminals, audio devices, or input backends, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical sessions
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Runs in any host (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`spawn`]: Spawn timer that tightens after every letter
//! - [`rng`]: Uniform letter generation from an injected random source
//! - [`game_state`]: The simulation itself (letters, speed, score, lifecycle)
//! - [`audio`]: Hit/fail cue sink seam with a silent default
//! - [`snapshot`]: Render-ready state copies and the render sink seam
//!
//! # Game Rules
//!
//! - Letters spawn above the top edge at a random x and fall at a shared speed
//! - Only the oldest letter can be typed; a correct key removes it, adds a
//!   point and raises the speed (up to a cap)
//! - A wrong letter, or any letter reaching the ground line, ends the round
//! - After a game over any key starts a new round; Escape quits
//!
//! # Example
//!
//! ```
//! use keyboard_jump_core::{Game, KeyOutcome};
//! use keyboard_jump_types::{GameConfig, Key};
//!
//! let mut game = Game::new(GameConfig::default(), 12345);
//! game.spawn_letter();
//!
//! let target = game.front().unwrap().ch;
//! assert_eq!(game.handle_key(Key::Char(target)), KeyOutcome::Hit);
//! assert_eq!(game.score(), 1);
//!
//! game.update(1.0 / 60.0);
//! assert!(!game.is_game_over());
//! ```
//!
//! # Timing
//!
//! Call [`Game::update`](game_state::Game::update) once per frame with the
//! elapsed time in seconds, then feed that frame's key presses to
//! [`Game::handle_key`](game_state::Game::handle_key).

pub mod audio;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod spawn;

pub use keyboard_jump_types as types;

// Re-export commonly used types for convenience
pub use audio::{AudioSink, Cue, RecordingAudio, SilentAudio};
pub use game_state::{Game, KeyOutcome};
pub use rng::LetterSource;
pub use snapshot::{GameSnapshot, RenderSink};
pub use spawn::{clamp_dt, SpawnController};
