//! Keyboard mapping for the terminal UI.

use crate::app::{AppEvent, Direction};
use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Maps a key press to an application event.
///
/// Digits 1-9 play the matching square, arrows move the cursor, `[` and
/// `]` step through history, `0` jumps to the game start.
pub fn map_key(key: KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
        KeyCode::Char('r') => Some(AppEvent::Restart),
        KeyCode::Char('0') => Some(AppEvent::SelectHistory(0)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(AppEvent::Activate),
        KeyCode::Char('[') | KeyCode::PageUp => Some(AppEvent::StepBack),
        KeyCode::Char(']') | KeyCode::PageDown => Some(AppEvent::StepForward),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppEvent::ActivateCursor),
        KeyCode::Up => Some(AppEvent::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(AppEvent::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(AppEvent::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(AppEvent::MoveCursor(Direction::Right)),
        _ => None,
    }
}
