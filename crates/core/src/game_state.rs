//! Game state module - the falling-letters simulation
//!
//! This module ties together the spawn timer, the letter source and the
//! active letters. It handles fall physics, ground collisions, key matching,
//! and the Active → GameOver → Active / Terminated lifecycle.

use std::collections::VecDeque;

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::{AudioSink, SilentAudio};
use crate::snapshot::GameSnapshot;
use crate::spawn::{clamp_dt, SpawnController};
use crate::types::{GameConfig, Key, Letter, Phase};
use crate::LetterSource;

/// What a single key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Matched the oldest letter.
    Hit,
    /// Typed a letter that was not the oldest one (or nothing was falling).
    Miss,
    /// Started a new round after a game over.
    Reset,
    /// Quit the session.
    Quit,
    /// Not a letter, or the session is already over.
    Ignored,
}

/// Complete simulation state for one session.
///
/// A session runs many rounds; [`Game::reset`] starts the next one. The seed
/// given at construction drives every random decision of every round, so two
/// games built from the same seed and fed the same inputs stay identical.
#[derive(Debug, Clone)]
pub struct Game<A = SilentAudio> {
    config: GameConfig,
    /// Oldest letter at the front.
    letters: VecDeque<Letter>,
    speed: f32,
    score: u32,
    round: u32,
    running: bool,
    game_over: bool,
    spawner: SpawnController,
    source: LetterSource,
    /// Spawn x positions for the current round.
    positions: Pcg32,
    /// Seeds every round's generators.
    seeds: Pcg32,
    audio: A,
}

impl Game<SilentAudio> {
    /// Create a silent game with the given RNG seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_audio(config, seed, SilentAudio)
    }
}

impl<A: AudioSink> Game<A> {
    /// Create a game that reports cues to `audio`.
    pub fn with_audio(config: GameConfig, seed: u64, audio: A) -> Self {
        let mut seeds = Pcg32::seed_from_u64(seed);
        let source = LetterSource::from_seed(seeds.next_u64());
        let positions = Pcg32::seed_from_u64(seeds.next_u64());

        log::info!("round 1 starting (seed {seed})");

        Self {
            letters: VecDeque::new(),
            speed: config.start_speed,
            score: 0,
            round: 1,
            running: true,
            game_over: false,
            spawner: SpawnController::from_config(&config),
            source,
            positions,
            seeds,
            audio,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Active letters, oldest first.
    pub fn letters(&self) -> &VecDeque<Letter> {
        &self.letters
    }

    /// The letter the player has to type next.
    pub fn front(&self) -> Option<&Letter> {
        self.letters.front()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// 1-based round counter (increments on every reset).
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if !self.running {
            Phase::Terminated
        } else if self.game_over {
            Phase::GameOver
        } else {
            Phase::Active
        }
    }

    pub fn spawner(&self) -> &SpawnController {
        &self.spawner
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Start a fresh round.
    ///
    /// Clears the letters, restores the start speed, zeroes the score and
    /// rebuilds the spawn timer and letter source. The audio sink is kept.
    pub fn reset(&mut self) {
        log::info!(
            "round {} finished with score {}; starting round {}",
            self.round,
            self.score,
            self.round + 1
        );

        self.letters.clear();
        self.speed = self.config.start_speed;
        self.score = 0;
        self.game_over = false;
        self.running = true;
        self.round += 1;
        self.spawner = SpawnController::from_config(&self.config);
        self.source = LetterSource::from_seed(self.seeds.next_u64());
        self.positions = Pcg32::seed_from_u64(self.seeds.next_u64());
    }

    /// Append a new letter just above the top edge.
    pub fn spawn_letter(&mut self) {
        let (lo, hi) = self.config.spawn_band();
        let x = if hi > lo {
            self.positions.random_range(lo..=hi)
        } else {
            lo
        };
        let ch = self.source.next_letter();
        let letter = Letter::new(ch, x, self.config.spawn_y);

        log::debug!("spawned {:?} at x={:.1}", letter.ch, letter.x);
        self.letters.push_back(letter);
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if !self.running {
            return KeyOutcome::Ignored;
        }

        if self.game_over {
            if key.is_quit() {
                self.quit();
                return KeyOutcome::Quit;
            }
            self.reset();
            return KeyOutcome::Reset;
        }

        if key.is_quit() {
            self.quit();
            return KeyOutcome::Quit;
        }

        let Some(pressed) = key.letter() else {
            return KeyOutcome::Ignored;
        };

        match self.letters.front() {
            Some(front) if front.ch == pressed => {
                self.score += 1;
                self.audio.play_hit();
                self.letters.pop_front();
                self.speed = (self.speed + self.config.speed_increment).min(self.config.max_speed);
                log::debug!(
                    "hit {pressed:?}: score {} speed {:.0}",
                    self.score,
                    self.speed
                );
                KeyOutcome::Hit
            }
            front => {
                log::info!(
                    "miss: pressed {pressed:?}, expected {:?}; round {} over with score {}",
                    front.map(|l| l.ch),
                    self.round,
                    self.score
                );
                self.audio.play_fail();
                self.game_over = true;
                KeyOutcome::Miss
            }
        }
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Does nothing once the round is over. Negative or non-finite deltas are
    /// treated as zero.
    pub fn update(&mut self, dt: f32) {
        if self.game_over || !self.running {
            return;
        }
        let dt = clamp_dt(dt);

        if self.spawner.tick(dt) {
            self.spawn_letter();
        }

        let fall = self.speed * dt;
        for letter in self.letters.iter_mut() {
            letter.y += fall;
        }

        // Any letter counts, not just the front one.
        let ground_y = self.config.ground_y();
        if let Some(landed) = self.letters.iter().find(|l| l.has_landed(ground_y)) {
            log::info!(
                "{:?} hit the ground; round {} over with score {}",
                landed.ch,
                self.round,
                self.score
            );
            self.audio.play_fail();
            self.game_over = true;
        }
    }

    fn quit(&mut self) {
        log::info!("quit requested (round {}, score {})", self.round, self.score);
        self.running = false;
    }

    /// Write the current state into `out`, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.letters.clear();
        out.letters.extend(self.letters.iter().copied());
        out.score = self.score;
        out.speed = self.speed;
        out.round = self.round;
        out.phase = self.phase();
        out.game_over = self.game_over;
        out.spawn_interval = self.spawner.current_interval();
        out.ground_y = self.config.ground_y();
        out.viewport_width = self.config.viewport_width;
        out.viewport_height = self.config.viewport_height;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    #[cfg(test)]
    pub(crate) fn letters_mut(&mut self) -> &mut VecDeque<Letter> {
        &mut self.letters
    }

    #[cfg(test)]
    pub(crate) fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }
}
