//! Event handling for the reservation view

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
#[derive(Debug, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Quit,
}

/// Handle a key event
pub fn handle_key(key: KeyEvent) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    // Global quit shortcuts (Ctrl+C, Ctrl+Q)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => HandleResult::Quit,
            _ => HandleResult::Continue,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => HandleResult::Quit,
        _ => HandleResult::Continue,
    }
}
