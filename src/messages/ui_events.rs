//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::state::CatalogPhase;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Card navigation
    NextSkip,
    PrevSkip,
    RowUp,
    RowDown,

    // Catalog actions
    Retry,

    // Wizard actions
    Continue,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    phase: &CatalogPhase,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Any key closes the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match phase {
        CatalogPhase::Loading => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            _ => None,
        },
        CatalogPhase::Error(_) => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
            KeyCode::Char('r') | KeyCode::Enter => Some(UiEvent::Retry),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            _ => None,
        },
        CatalogPhase::Ready => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Some(UiEvent::PrevSkip),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(UiEvent::NextSkip),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::RowUp),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::RowDown),
            KeyCode::Enter | KeyCode::Char('c') => Some(UiEvent::Continue),
            KeyCode::Char('r') => Some(UiEvent::Retry),
            _ => None,
        },
    }
}
