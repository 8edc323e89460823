//! # Month Picker
//!
//! Year and month selectors plus the action that adds the chosen month to
//! the ledger. The field above the selectors shows the last picked value.

use eframe::egui;

use crate::ui::app_state::BudgetBookApp;
use crate::ui::components::theme::Palette;
use crate::ui::state::picker_state::month_name;

impl BudgetBookApp {
    pub fn render_month_picker(&mut self, ui: &mut egui::Ui) {
        let palette = Palette::for_theme(self.theme());

        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.label(egui::RichText::new("Prepare Your BUDGETbook")
                .font(egui::FontId::new(34.0, egui::FontFamily::Proportional))
                .color(palette.heading));
            ui.add_space(12.0);
            ui.label(egui::RichText::new("Pick Month-Year").size(20.0));
            ui.add_space(8.0);

            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(self.picker_state.display_text()).monospace().size(16.0));
            });
            ui.add_space(8.0);

            let years = self.picker_state.year_range();
            let mut picked = false;
            ui.horizontal(|ui| {
                // Center the selector row
                let row_width = 320.0;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

                egui::ComboBox::from_id_source("picker_year")
                    .selected_text(format!("{:04}", self.picker_state.year))
                    .width(80.0)
                    .show_ui(ui, |ui| {
                        for year in years {
                            ui.selectable_value(&mut self.picker_state.year, year, format!("{:04}", year));
                        }
                    });

                egui::ComboBox::from_id_source("picker_month")
                    .selected_text(month_name(self.picker_state.month))
                    .width(110.0)
                    .show_ui(ui, |ui| {
                        for month in 1..=12 {
                            ui.selectable_value(&mut self.picker_state.month, month, month_name(month));
                        }
                    });

                let add_button = egui::Button::new(egui::RichText::new("Add month").color(palette.on_accent))
                    .fill(palette.accent);
                picked = ui.add(add_button).clicked();
            });

            if picked {
                self.handle_month_picked();
            }
        });
    }
}
