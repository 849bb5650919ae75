use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
}

/// Drains every pending terminal event without blocking the tick. Raw mode
/// turns Ctrl-C into an ordinary key event, so the interrupt path is a quit
/// request like any other.
pub fn poll_pending() -> Result<Option<AppEvent>> {
    let mut quit = None;
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()?
            && quit_requested(&key)
        {
            quit = Some(AppEvent::Quit);
        }
    }
    Ok(quit)
}

fn quit_requested(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
