//! Key mapping from terminal events to game input.

use crate::types::{Direction, InputAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game input.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => {
            Some(InputAction::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => {
            Some(InputAction::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => {
            Some(InputAction::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => {
            Some(InputAction::Turn(Direction::Right))
        }

        KeyCode::Char('r' | 'R') => Some(InputAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
