//! Terminal input module.
//!
//! This module is independent of any UI framework. It resolves `crossterm`
//! key events into [`crate::types::Key`] and buffers them between frames so
//! the host loop can hand them to the simulation after `update`.

pub mod map;
pub mod queue;

pub use keyboard_jump_types as types;

pub use map::{map_key, should_quit};
pub use queue::{KeyQueue, KEY_QUEUE_CAPACITY};
