//! Key bindings: maps terminal key events to game inputs.

use crate::flappy::FlappyInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key event into a game input.
///
/// Only presses count; repeats and releases (reported on some platforms)
/// map to `Other` so a held key doesn't flap every frame.
pub fn map_key(key: KeyEvent) -> FlappyInput {
    if key.kind != KeyEventKind::Press {
        return FlappyInput::Other;
    }

    // Ctrl+C would otherwise be swallowed by raw mode
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return FlappyInput::Quit;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            FlappyInput::Flap
        }
        KeyCode::Char('s') | KeyCode::Char('S') => FlappyInput::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => FlappyInput::Quit,
        _ => FlappyInput::Other,
    }
}
