//! Key mapping from terminal events to engine commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// DOM-style identifier for the keys the engine understands.
///
/// Lets a terminal host speak the same raw key identifiers as any other host
/// (see [`Command::from_key`]).
pub fn key_identifier(code: KeyCode) -> Option<&'static str> {
    match code {
        KeyCode::Left => Some("ArrowLeft"),
        KeyCode::Right => Some("ArrowRight"),
        KeyCode::Down => Some("ArrowDown"),
        KeyCode::Up => Some("ArrowUp"),
        _ => None,
    }
}

/// Map keyboard input to engine commands.
///
/// Arrow keys plus vim (`hjkl`) and WASD aliases.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if let Some(id) = key_identifier(key.code) {
        return Command::from_key(id);
    }

    match key.code {
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::MoveLeft)
        }
        KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::MoveRight)
        }
        KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::MoveDown)
        }
        KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Command::Rotate)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should start a new game.
pub fn should_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
