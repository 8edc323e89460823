//! # Month Tiles
//!
//! One tile per ledger entry, in ledger order. The month label links to the
//! expenses page; the delete button opens the confirmation prompt.

use eframe::egui;
use shared::MonthYearToken;

use crate::ui::app_state::BudgetBookApp;
use crate::ui::components::theme::Palette;

/// What the user clicked on a tile this frame
enum TileAction {
    Open(MonthYearToken),
    Delete(MonthYearToken),
}

impl BudgetBookApp {
    pub fn render_month_tiles(&mut self, ui: &mut egui::Ui) {
        let months = self.months();
        if months.is_empty() {
            return;
        }

        let palette = Palette::for_theme(self.theme());
        let mut action = None;

        ui.add_space(20.0);
        ui.separator();
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
                for token in &months {
                    if let Some(clicked) = render_tile(ui, token, &palette) {
                        action = Some(clicked);
                    }
                }
            });
        });

        match action {
            Some(TileAction::Open(token)) => self.open_expenses(token),
            Some(TileAction::Delete(token)) => self.request_delete(token),
            None => {}
        }
    }
}

fn render_tile(ui: &mut egui::Ui, token: &MonthYearToken, palette: &Palette) -> Option<TileAction> {
    let mut action = None;

    egui::Frame::none()
        .fill(palette.accent)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_min_width(110.0);
            ui.vertical_centered(|ui| {
                let label = egui::RichText::new(token.to_string())
                    .size(20.0)
                    .strong()
                    .color(palette.on_accent);
                if ui.link(label).clicked() {
                    action = Some(TileAction::Open(token.clone()));
                }

                ui.add_space(6.0);
                let delete = egui::Button::new(egui::RichText::new("Delete").color(egui::Color32::WHITE))
                    .fill(palette.danger);
                if ui.add(delete).clicked() {
                    action = Some(TileAction::Delete(token.clone()));
                }
            });
        });

    action
}
