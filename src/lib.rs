//! Keyboard Jump (workspace facade crate).
//!
//! Re-exports the workspace crates as `keyboard_jump::{core,input,term,types}`
//! and holds the runtime options the binary reads from the environment.

pub mod run_config;

pub use keyboard_jump_core as core;
pub use keyboard_jump_input as input;
pub use keyboard_jump_term as term;
pub use keyboard_jump_types as types;

pub use run_config::RunConfig;
