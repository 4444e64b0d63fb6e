//! Presentation state of the success and error panels.
//!
//! Each operation touches exactly one panel. Nothing stops both panels from
//! being visible at once; the workflow simply never asks for that.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    visible: bool,
    text: String,
}

impl Panel {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last text written to the panel. Kept after hiding, like the page does.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn show(&mut self, text: &str) {
        self.text = text.to_string();
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVisibility {
    Hidden,
    Success,
    Error,
    Both,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    success: Panel,
    error: Panel,
}

impl UiState {
    pub fn success(&self) -> &Panel {
        &self.success
    }

    pub fn error(&self) -> &Panel {
        &self.error
    }

    pub fn show_success(&mut self, email: &str) {
        self.success.show(email);
    }

    pub fn hide_success(&mut self) {
        self.success.hide();
    }

    pub fn show_error(&mut self, message: &str) {
        self.error.show(message);
    }

    pub fn hide_error(&mut self) {
        self.error.hide();
    }

    pub fn visibility(&self) -> PanelVisibility {
        match (self.success.visible, self.error.visible) {
            (false, false) => PanelVisibility::Hidden,
            (true, false) => PanelVisibility::Success,
            (false, true) => PanelVisibility::Error,
            (true, true) => PanelVisibility::Both,
        }
    }
}
