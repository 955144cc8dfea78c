//! Terminal bell cue sink.
//!
//! A terminal has exactly one sound: the bell. Misses ring it; hits stay
//! silent. If the bell cannot be written the sink turns itself off.

use std::io::{self, Write};

use crate::core::AudioSink;

const BEL: &[u8] = b"\x07";

pub struct BellAudio<W: Write = io::Stdout> {
    out: W,
    enabled: bool,
}

impl BellAudio<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// A bell that never rings.
    pub fn muted() -> Self {
        let mut bell = Self::new();
        bell.enabled = false;
        bell
    }
}

impl Default for BellAudio<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> BellAudio<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out, enabled: true }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn ring(&mut self) {
        if !self.enabled {
            return;
        }
        if let Err(err) = self.out.write_all(BEL).and_then(|_| self.out.flush()) {
            log::warn!("terminal bell unavailable, cues disabled: {err}");
            self.enabled = false;
        }
    }
}

impl<W: Write> AudioSink for BellAudio<W> {
    fn play_fail(&mut self) {
        self.ring();
    }
}
