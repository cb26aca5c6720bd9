//! Keyboard input mapping
//!
//! Translates terminal events into clock actions. Movement accepts both the
//! arrow keys and vi-style letters in either case.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::geometry::Direction;

/// Something the user asked the clock to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    ToggleSeconds,
    ToggleTwelveHour,
    ToggleCenter,
    Quit,
}

/// Terminal events the main loop cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Ctrl+C while the terminal is in raw mode
    Interrupt,
}

impl TermEvent {
    /// Convert a crossterm event, dropping the kinds the clock ignores
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Release => None,
            Event::Key(key)
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')) =>
            {
                Some(TermEvent::Interrupt)
            }
            Event::Key(key) => Some(TermEvent::Key(key)),
            Event::Resize(w, h) => Some(TermEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Map a key press to an action; unbound keys give `None`
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Action::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Action::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Action::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Action::Move(Direction::Right)
        }
        KeyCode::Char('s') | KeyCode::Char('S') => Action::ToggleSeconds,
        KeyCode::Char('t') | KeyCode::Char('T') => Action::ToggleTwelveHour,
        KeyCode::Char('c') | KeyCode::Char('C') => Action::ToggleCenter,
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}
