//! # Modal State Module
//!
//! State of the two dialogs on the month page: the delete confirmation prompt
//! and the duplicate-month notice. At most one deletion can be pending.

use shared::MonthYearToken;

#[derive(Debug, Default)]
pub struct ModalState {
    /// Month waiting for the user to confirm or cancel its deletion
    pub pending_deletion: Option<MonthYearToken>,

    /// Alert-style notice shown until dismissed
    pub notice: Option<String>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompt shown while a deletion is pending
    pub fn deletion_prompt(&self) -> Option<String> {
        self.pending_deletion
            .as_ref()
            .map(|token| format!("Are you sure you want to delete {}?", token))
    }

    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
