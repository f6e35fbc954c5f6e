//! Key mapping from terminal events to session intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use brickfall_types::Intent;

/// Map keyboard input to an intent.
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Left => Some(Intent::MoveLeft),
        KeyCode::Right => Some(Intent::MoveRight),
        KeyCode::Down => Some(Intent::SoftDrop),
        KeyCode::Up => Some(Intent::Rotate),
        KeyCode::Char(' ') => Some(Intent::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Intent::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Reset),
        _ => None,
    }
}

/// Whether the key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_drive_the_piece() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Intent::MoveLeft));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(Intent::MoveRight)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Intent::SoftDrop));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Intent::Rotate));
    }

    #[test]
    fn session_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), Some(Intent::Start));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('p'))),
            Some(Intent::TogglePause)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('R'))), Some(Intent::Reset));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('p'))));
    }
}
