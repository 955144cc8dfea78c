//! Key mapping from terminal events to game keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a terminal key event to a game key.
///
/// Only presses count; repeats and releases map to `None` so a held key
/// cannot type the same letter twice.
pub fn map_key(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if should_quit(key) {
        return Some(Key::Quit);
    }

    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(Key::Char(c))
        }
        _ => Some(Key::Other),
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_letter_keys_keep_case() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(Key::Char('a'))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Key::Char('A'))
        );
    }

    #[test]
    fn test_non_letter_chars_pass_through() {
        // The core decides what is a letter.
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('7'))),
            Some(Key::Char('7'))
        );
    }

    #[test]
    fn test_special_keys_map_to_other() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Key::Other));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), Some(Key::Other));
        assert_eq!(map_key(KeyEvent::from(KeyCode::F(1))), Some(Key::Other));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            Some(Key::Other)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));

        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(Key::Quit));
    }

    #[test]
    fn test_release_and_repeat_are_dropped() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        let repeat = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
            KeyEventState::NONE,
        );
        assert_eq!(map_key(release), None);
        assert_eq!(map_key(repeat), None);
    }
}
