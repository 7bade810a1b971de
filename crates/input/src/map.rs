//! Key mapping from terminal events to movement keys.

use crate::types::MoveKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key to a movement key.
pub fn map_move_key(code: KeyCode) -> Option<MoveKey> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(MoveKey::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(MoveKey::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(MoveKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(MoveKey::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
