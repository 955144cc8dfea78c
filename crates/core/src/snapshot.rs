//! Render-ready snapshots of the simulation and the sink that draws them.

use crate::types::{Letter, Phase};

/// Render-ready copy of the simulation state.
///
/// Views only ever see a snapshot, never the live [`crate::Game`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Falling letters, oldest first.
    pub letters: Vec<Letter>,
    pub score: u32,
    pub speed: f32,
    pub round: u32,
    pub phase: Phase,
    pub game_over: bool,
    pub spawn_interval: f32,
    pub ground_y: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl GameSnapshot {
    /// The letter the player has to type next.
    pub fn front(&self) -> Option<&Letter> {
        self.letters.first()
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Active
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            letters: Vec::new(),
            score: 0,
            speed: 0.0,
            round: 0,
            phase: Phase::Active,
            game_over: false,
            spawn_interval: 0.0,
            ground_y: 0.0,
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }
}

/// Draws snapshots somewhere.
///
/// Failures belong to the host loop; the simulation never sees them.
pub trait RenderSink {
    type Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Self::Error>;
}
