//! # Modals
//!
//! The delete confirmation prompt and the duplicate-month notice.

use eframe::egui;

use crate::backend::domain::commands::ledger::Confirmation;
use crate::ui::app_state::BudgetBookApp;

impl BudgetBookApp {
    /// Render all modals - main modal coordinator
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_delete_confirmation(ctx);
        self.render_notice(ctx);
    }

    fn render_delete_confirmation(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.modal_state.deletion_prompt() else {
            return;
        };

        let mut answer = None;
        egui::Window::new("Delete month")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(prompt);
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        answer = Some(Confirmation::Confirmed);
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(Confirmation::Declined);
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            answer = Some(Confirmation::Declined);
        }

        if let Some(confirmation) = answer {
            self.resolve_pending_deletion(confirmation);
        }
    }

    fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.modal_state.notice.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(notice);
                ui.add_space(10.0);
                dismissed = ui.button("OK").clicked();
            });

        if dismissed {
            self.modal_state.dismiss_notice();
        }
    }
}
