use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// User actions from keyboard events. The same physical keys mean different
/// things depending on whether the palette overlay is open; that routing
/// happens in the app, not here.
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    TogglePalette,
    Confirm,
    Cancel,
    MoveUp,
    MoveDown,
    ProjectPrev,
    ProjectNext,
    Resync,
    InputChar(char),
    Backspace,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('k'), KeyModifiers::CONTROL) => Action::TogglePalette,
        (KeyCode::Esc, _) => Action::Cancel,

        // Project strip (Vim/Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::ProjectPrev,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::ProjectNext,
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Action::Resync,

        // Recall history / palette navigation
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,

        (KeyCode::Enter, _) => Action::Confirm,

        // Line input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::InputChar(c)
        }
        (KeyCode::Backspace, _) => Action::Backspace,

        _ => Action::None,
    }
}
