//! Terminal "game renderer" module.
//!
//! A small, game-oriented presentation layer for terminal play. It renders
//! into a simple framebuffer that is diffed and flushed to a crossterm
//! backend, and it implements the core's render and audio seams.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Scale the simulation's unit space onto any terminal size
//! - Degrade quietly when the terminal cannot do something (bell, tiny windows)

pub mod bell;
pub mod clock;
pub mod fb;
pub mod game_view;
pub mod presenter;
pub mod renderer;

pub use keyboard_jump_core as core;
pub use keyboard_jump_types as types;

pub use bell::BellAudio;
pub use clock::{FrameClock, MAX_FRAME_DT};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Palette, Viewport, MIN_VIEW_HEIGHT, MIN_VIEW_WIDTH};
pub use presenter::TerminalPresenter;
pub use renderer::{encode_diff_into, encode_full_into, FrameStats, TerminalRenderer};
