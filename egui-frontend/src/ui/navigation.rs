//! # Navigation
//!
//! Two routes: the month page (`/`) and the expenses page for one month
//! (`/expenses/<YYYY-MM>`). The expenses page is an external collaborator
//! plugged in through [`ExpensesPage`]; it owns the `expenses-<YYYY-MM>` key.

use eframe::egui;
use shared::{MonthYearToken, ThemeFlag};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Expenses(MonthYearToken),
}

impl Route {
    const EXPENSES_PREFIX: &'static str = "/expenses/";

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Expenses(token) => format!("{}{}", Self::EXPENSES_PREFIX, token),
        }
    }

    /// Parse a route path; unknown paths and malformed tokens yield None
    pub fn parse(path: &str) -> Option<Self> {
        if path == "/" {
            return Some(Route::Home);
        }
        path.strip_prefix(Self::EXPENSES_PREFIX)
            .and_then(|token| token.parse().ok())
            .map(Route::Expenses)
    }
}

/// What the expenses page asks the app to do after rendering a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpensesPageAction {
    Stay,
    BackToMonths,
}

/// Page that tracks the expenses of one month
pub trait ExpensesPage {
    fn show(&mut self, ui: &mut egui::Ui, token: &MonthYearToken, theme: ThemeFlag) -> ExpensesPageAction;
}

/// Stand-in used when no expenses page is plugged in
#[derive(Debug, Default)]
pub struct ExternalExpensesPage;

impl ExpensesPage for ExternalExpensesPage {
    fn show(&mut self, ui: &mut egui::Ui, token: &MonthYearToken, _theme: ThemeFlag) -> ExpensesPageAction {
        let mut action = ExpensesPageAction::Stay;
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(format!("Expenses for {}", token));
            ui.label(format!("Records are kept under '{}'.", token.expenses_key()));
            ui.add_space(20.0);
            if ui.link("← Back to months").clicked() {
                action = ExpensesPageAction::BackToMonths;
            }
        });
        action
    }
}
