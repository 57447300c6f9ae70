//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map a key press to a game action. Arrows plus the classic hjkl/ad layout.
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::SoftDrop),

        KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::RotateCcw),
        KeyCode::Up | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::RotateCw),

        KeyCode::Char(' ') => Some(GameAction::HardDrop),

        _ => None,
    }
}

/// Whether the key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
