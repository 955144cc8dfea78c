//! Keyboard Jump terminal runner (default binary).
//!
//! Owns the terminal, polls crossterm for keys, advances the simulation once
//! per frame and hands the result to the framebuffer renderer.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use keyboard_jump::core::{AudioSink, Game, GameSnapshot, RenderSink};
use keyboard_jump::input::{map_key, KeyQueue};
use keyboard_jump::term::{BellAudio, FrameClock, GameView, TerminalPresenter};
use keyboard_jump::types::GameConfig;
use keyboard_jump::RunConfig;

fn main() -> Result<()> {
    let run_config = RunConfig::from_env();
    init_logging(&run_config)?;

    let config = GameConfig::default();
    config.validate().context("invalid game configuration")?;

    let audio = if run_config.mute {
        BellAudio::muted()
    } else {
        BellAudio::new()
    };
    let mut game = Game::with_audio(config, run_config.seed, audio);

    let mut presenter = TerminalPresenter::new(GameView::default());
    presenter.enter()?;

    let result = run(&mut game, &mut presenter, &run_config);

    // Always try to restore terminal state.
    let _ = presenter.exit();

    log::info!(
        "session over after {} round(s), last score {}",
        game.round(),
        game.score()
    );
    result
}

fn run<A: AudioSink>(
    game: &mut Game<A>,
    presenter: &mut TerminalPresenter,
    run_config: &RunConfig,
) -> Result<()> {
    let mut clock = FrameClock::new(run_config.fps);
    let mut keys = KeyQueue::new();
    let mut snapshot = GameSnapshot::default();

    while game.is_running() {
        // Collect input until the next frame is due.
        while event::poll(clock.timeout())? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(key) = map_key(key) {
                        if !keys.push(key) {
                            log::warn!("key queue full, dropped {key:?}");
                        }
                    }
                }
                Event::Resize(w, h) => presenter.resize(w, h),
                _ => {}
            }
        }

        let dt = clock.tick();
        game.update(dt);
        for key in keys.drain() {
            game.handle_key(key);
        }

        game.snapshot_into(&mut snapshot);
        presenter.render(&snapshot)?;
    }

    Ok(())
}

/// Route `log` output to the file named by `KEYBOARD_JUMP_LOG`.
///
/// The game owns the terminal, so logging to stderr would tear the frame.
fn init_logging(run_config: &RunConfig) -> Result<()> {
    let Some(path) = run_config.log_path.as_deref() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {path}"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialized")?;

    log::info!("logging to {path} (seed {})", run_config.seed);
    Ok(())
}
