//! # Header Module
//!
//! Top bar shown on every route: the BUDGETbook title and the dark-mode switch.

use eframe::egui;

use crate::ui::app_state::BudgetBookApp;
use crate::ui::components::theme::Palette;

impl BudgetBookApp {
    /// Render the header bar
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let palette = Palette::for_theme(self.theme());

        let frame = egui::Frame::none()
            .fill(palette.accent)
            .inner_margin(egui::Margin::symmetric(28.0, 12.0));

        frame.show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(egui::Label::new(egui::RichText::new("BUDGETbook")
                    .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(palette.on_accent))
                    .selectable(false));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut dark = self.theme().is_dark();
                    let toggle = ui.checkbox(&mut dark, egui::RichText::new("Dark mode").color(palette.on_accent));
                    if toggle.changed() {
                        self.toggle_theme();
                    }
                });
            });
        });
    }

    /// Render the storage error banner, if any
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        let Some(error) = self.ui_state.error_message.clone() else {
            return;
        };

        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
            if ui.small_button("Dismiss").clicked() {
                self.ui_state.clear_messages();
            }
        });
    }
}
