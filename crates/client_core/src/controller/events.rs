//! Page events delivered to the controller, and the Escape dismissal rule.

use crate::controller::ui_state::UiState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Other(String),
}

impl Key {
    /// Maps a key name as reported by the page (`KeyboardEvent.key`).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            other => Key::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    FieldChanged { name: String, value: String },
    FieldCleared { name: String },
    Submit,
    KeyDown(Key),
    CloseSuccess,
    CloseError,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::FieldChanged { .. } => "field_changed",
            UiEvent::FieldCleared { .. } => "field_cleared",
            UiEvent::Submit => "submit",
            UiEvent::KeyDown(_) => "key_down",
            UiEvent::CloseSuccess => "close_success",
            UiEvent::CloseError => "close_error",
        }
    }
}

/// Escape hides whichever panels are open. Both checks always run.
/// Returns whether anything was hidden.
pub fn handle_key_down(ui: &mut UiState, key: &Key) -> bool {
    if *key != Key::Escape {
        return false;
    }

    let mut dismissed = false;
    if ui.success().is_visible() {
        ui.hide_success();
        dismissed = true;
    }
    if ui.error().is_visible() {
        ui.hide_error();
        dismissed = true;
    }
    dismissed
}
