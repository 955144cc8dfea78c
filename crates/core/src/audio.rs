//! Audio cue seam.
//!
//! The simulation only announces *that* a hit or a miss happened. Whether
//! anything is actually audible is the sink's business; a sink whose device is
//! missing simply does nothing.

/// Receives hit/fail cues from the simulation.
///
/// Both methods are fire-and-forget and default to no-ops, so an
/// implementation only overrides the cues it can actually play.
pub trait AudioSink {
    fn play_hit(&mut self) {}

    fn play_fail(&mut self) {}
}

/// A sink that never makes a sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {}

impl<A: AudioSink + ?Sized> AudioSink for Box<A> {
    fn play_hit(&mut self) {
        (**self).play_hit();
    }

    fn play_fail(&mut self) {
        (**self).play_fail();
    }
}

impl<A: AudioSink + ?Sized> AudioSink for &mut A {
    fn play_hit(&mut self) {
        (**self).play_hit();
    }

    fn play_fail(&mut self) {
        (**self).play_fail();
    }
}

/// A cue emitted by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Hit,
    Fail,
}

/// Sink that remembers every cue it was asked to play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingAudio {
    cues: Vec<Cue>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn hits(&self) -> usize {
        self.cues.iter().filter(|c| **c == Cue::Hit).count()
    }

    pub fn fails(&self) -> usize {
        self.cues.iter().filter(|c| **c == Cue::Fail).count()
    }

    pub fn clear(&mut self) {
        self.cues.clear();
    }
}

impl AudioSink for RecordingAudio {
    fn play_hit(&mut self) {
        self.cues.push(Cue::Hit);
    }

    fn play_fail(&mut self) {
        self.cues.push(Cue::Fail);
    }
}
