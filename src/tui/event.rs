use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events, decoupled from crossterm so screens can be
/// tested by feeding them events directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C / Ctrl+Q: exit from anywhere.
    ForceQuit,
    /// Enter: submit the form, reset the result, dismiss the modal.
    Submit,
    /// Esc: dismiss the modal, or quit from a quiet screen.
    Escape,
    InputChar(char),
    Backspace,
    /// Tab / Down: move focus to the next field.
    FocusNext,
    /// Shift+Tab / Up: move focus to the previous field.
    FocusPrev,
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c' | 'q')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
                (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
                (_, KeyCode::Down) => Some(TuiEvent::FocusNext),
                (_, KeyCode::Up) => Some(TuiEvent::FocusPrev),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
