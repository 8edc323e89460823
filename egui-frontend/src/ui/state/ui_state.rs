//! # UI State Module
//!
//! General UI state that is not tied to a particular component.
//!
//! ## Responsibilities:
//! - User feedback messages (storage errors)

/// General UI state for user feedback
#[derive(Debug, Default)]
pub struct UIState {
    /// Error message to display to the user
    pub error_message: Option<String>,
}

impl UIState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear any error messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }
}
