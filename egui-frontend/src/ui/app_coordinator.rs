//! # App Coordinator Module
//!
//! The main update loop, implementing `eframe::App`.
//!
//! ## Application Flow:
//! 1. Apply the persisted light/dark visuals
//! 2. Render the header (every route)
//! 3. Render the month page or hand over to the expenses page
//! 4. Render any active modals

use eframe::egui;

use crate::ui::app_state::BudgetBookApp;
use crate::ui::components::apply_theme;
use crate::ui::navigation::{ExpensesPageAction, Route};

impl eframe::App for BudgetBookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_theme(ctx, self.theme());

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_messages(ui);

            match self.route.clone() {
                Route::Home => {
                    self.render_month_picker(ui);
                    self.render_month_tiles(ui);
                }
                Route::Expenses(token) => {
                    let theme = self.theme();
                    if self.expenses_page.show(ui, &token, theme) == ExpensesPageAction::BackToMonths {
                        self.go_home();
                    }
                }
            }
        });

        self.render_modals(ctx);
    }
}
