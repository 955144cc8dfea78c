use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use keyboard_jump::core::{Cue, Game, GameSnapshot, KeyOutcome, RecordingAudio, RenderSink};
use keyboard_jump::input::{map_key, KeyQueue};
use keyboard_jump::term::{BellAudio, GameView, TerminalPresenter, TerminalRenderer, Viewport};
use keyboard_jump::types::{GameConfig, Key, Phase};
use keyboard_jump::RunConfig;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn quiet_config() -> GameConfig {
    GameConfig {
        spawn_interval: 1000.0,
        min_spawn_interval: 1000.0,
        ..GameConfig::default()
    }
}

#[test]
fn test_full_session_lifecycle() {
    let mut game = Game::with_audio(quiet_config(), 7, RecordingAudio::new());

    for _ in 0..3 {
        game.spawn_letter();
    }
    for _ in 0..3 {
        let c = game.front().map(|l| l.ch).unwrap();
        assert_eq!(game.handle_key(Key::Char(c)), KeyOutcome::Hit);
    }
    assert_eq!(game.score(), 3);
    assert_eq!(game.speed(), 132.0);

    // Nothing falling: any letter is wrong.
    assert_eq!(game.handle_key(Key::Char('k')), KeyOutcome::Miss);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.audio().cues(), &[Cue::Hit, Cue::Hit, Cue::Hit, Cue::Fail]);

    assert_eq!(game.handle_key(Key::Char('k')), KeyOutcome::Reset);
    assert_eq!(game.phase(), Phase::Active);
    assert_eq!(game.round(), 2);
    assert_eq!(game.score(), 0);
    assert_eq!(game.speed(), 120.0);

    assert_eq!(game.handle_key(Key::Quit), KeyOutcome::Quit);
    assert_eq!(game.phase(), Phase::Terminated);
    assert!(!game.is_running());
}

#[test]
fn test_terminal_keys_drive_the_game() {
    let mut game = Game::new(quiet_config(), 11);
    game.spawn_letter();
    let target = game.front().map(|l| l.ch).unwrap();

    let mut queue = KeyQueue::new();
    for event in [
        press(KeyCode::Char(target.to_ascii_uppercase())),
        press(KeyCode::Left),
        press(KeyCode::Esc),
    ] {
        if let Some(key) = map_key(event) {
            queue.push(key);
        }
    }

    let outcomes: Vec<KeyOutcome> = queue.drain().map(|k| game.handle_key(k)).collect();
    assert_eq!(
        outcomes,
        vec![KeyOutcome::Hit, KeyOutcome::Ignored, KeyOutcome::Quit]
    );
    assert_eq!(game.score(), 1);
    assert!(queue.is_empty());
}

#[test]
fn test_key_release_events_are_not_keys() {
    let mut release = press(KeyCode::Char('a'));
    release.kind = KeyEventKind::Release;
    assert_eq!(map_key(release), None);

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(map_key(ctrl_c), Some(Key::Quit));
}

#[test]
fn test_letter_reaching_ground_ends_round() {
    let config = GameConfig {
        spawn_y: 451.0,
        start_speed: 100.0,
        spawn_interval: 1.0,
        min_spawn_interval: 1.0,
        ..GameConfig::default()
    };
    let mut game = Game::with_audio(config, 3, RecordingAudio::new());

    game.update(1.0);
    assert_eq!(game.letters().len(), 1);
    assert!(game.is_game_over());
    assert_eq!(game.audio().fails(), 1);

    // Frozen until a key arrives.
    let frozen = game.snapshot();
    game.update(1.0);
    assert_eq!(game.snapshot(), frozen);
}

#[test]
fn test_default_session_eventually_loses_without_input() {
    let mut game = Game::new(GameConfig::default(), 5);
    let mut frames = 0;
    while !game.is_game_over() {
        game.update(1.0 / 60.0);
        frames += 1;
        assert!(frames < 60 * 60, "letters never reached the ground");
    }
    // First spawn at 1.2s, then roughly (452 + 30) / 120 s of falling.
    let seconds = frames as f32 / 60.0;
    assert!(seconds > 4.5 && seconds < 6.0, "lost after {seconds}s");
}

#[test]
fn test_bell_rings_on_fail_only() {
    let mut game = Game::with_audio(quiet_config(), 21, BellAudio::with_writer(Vec::new()));
    game.spawn_letter();
    let c = game.front().map(|l| l.ch).unwrap();
    game.handle_key(Key::Char(c));
    assert!(game.audio().writer().is_empty());

    game.handle_key(Key::Char('a'));
    assert_eq!(game.audio().writer().as_slice(), b"\x07");
}

#[test]
fn test_presenter_draws_snapshots() {
    let renderer = TerminalRenderer::with_writer(Vec::new());
    let mut presenter =
        TerminalPresenter::with_renderer(renderer, GameView::default(), Viewport::new(60, 20));

    let mut game = Game::new(quiet_config(), 2);
    game.spawn_letter();
    let mut snap = GameSnapshot::default();
    game.snapshot_into(&mut snap);

    presenter.render(&snap).unwrap();
    assert!(!presenter.renderer().writer().is_empty());
}

#[test]
fn test_run_config_from_lookup() {
    let config = RunConfig::from_lookup(|name| match name {
        "KEYBOARD_JUMP_SEED" => Some("42".to_string()),
        "KEYBOARD_JUMP_MUTE" => Some("1".to_string()),
        _ => None,
    });
    assert_eq!(config.seed, 42);
    assert!(config.mute);
    assert_eq!(config.log_path, None);

    let a = Game::new(GameConfig::default(), config.seed);
    let b = Game::new(GameConfig::default(), config.seed);
    assert_eq!(a.snapshot(), b.snapshot());
}
