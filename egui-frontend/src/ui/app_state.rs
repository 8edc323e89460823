//! # App State
//!
//! The [`BudgetBookApp`] struct and the handlers that turn user intent
//! (month picked, delete clicked, theme switched, tile opened) into backend
//! calls. Rendering lives in the `components` modules; the handlers here
//! never touch egui, so they can be exercised without a window.

use log::{error, info};
use shared::{MonthYearToken, ThemeFlag};

use crate::backend::domain::commands::ledger::{Confirmation, DeleteMonthCommand, DeleteMonthOutcome};
use crate::backend::domain::MonthLedgerError;
use crate::backend::Backend;
use crate::ui::navigation::{ExpensesPage, ExternalExpensesPage, Route};
use crate::ui::state::{ModalState, PickerState, UIState};

/// Main application struct for the egui BUDGETbook app
pub struct BudgetBookApp {
    /// Backend services
    pub backend: Backend,

    /// Page currently shown
    pub route: Route,

    /// Collaborator rendering the expenses route
    pub expenses_page: Box<dyn ExpensesPage>,

    pub ui_state: UIState,
    pub modal_state: ModalState,
    pub picker_state: PickerState,
}

impl BudgetBookApp {
    pub fn new(backend: Backend) -> Self {
        Self::with_expenses_page(backend, Box::new(ExternalExpensesPage))
    }

    pub fn with_expenses_page(backend: Backend, expenses_page: Box<dyn ExpensesPage>) -> Self {
        Self {
            backend,
            route: Route::Home,
            expenses_page,
            ui_state: UIState::new(),
            modal_state: ModalState::new(),
            picker_state: PickerState::new(),
        }
    }

    pub fn theme(&self) -> ThemeFlag {
        self.backend.theme_service.get()
    }

    pub fn months(&self) -> Vec<MonthYearToken> {
        self.backend.month_ledger_service.list_months()
    }

    pub fn toggle_theme(&mut self) {
        if let Err(e) = self.backend.theme_service.toggle() {
            error!("Failed to save theme: {:#}", e);
            self.ui_state.set_error(format!("Could not save theme: {:#}", e));
        }
    }

    /// Add the month currently selected in the picker
    pub fn handle_month_picked(&mut self) {
        let (year, month) = (self.picker_state.year, self.picker_state.month);
        self.picker_state.last_picked = Some((year, month));

        match self.backend.month_ledger_service.add_year_month(year, month) {
            Ok(result) => {
                self.ui_state.clear_messages();
                info!("Month {} added from picker", result.token);
            }
            Err(MonthLedgerError::AlreadyExists(_)) => {
                self.modal_state.show_notice("This month-year is already selected!");
            }
            Err(e @ MonthLedgerError::InvalidToken(_)) => {
                self.modal_state.show_notice(e.to_string());
            }
            Err(e @ MonthLedgerError::Storage(_)) => {
                error!("Failed to add month: {}", e);
                self.ui_state.set_error(e.to_string());
            }
        }
    }

    /// Open the confirmation prompt for deleting `token`
    pub fn request_delete(&mut self, token: MonthYearToken) {
        self.modal_state.pending_deletion = Some(token);
    }

    /// Resolve the pending deletion with the user's answer
    pub fn resolve_pending_deletion(&mut self, confirmation: Confirmation) {
        let Some(token) = self.modal_state.pending_deletion.take() else {
            return;
        };

        let command = DeleteMonthCommand { token: token.clone(), confirmation };
        match self.backend.month_ledger_service.delete_month(command) {
            Ok(result) => {
                if result.outcome == DeleteMonthOutcome::Deleted && self.route == Route::Expenses(token) {
                    self.route = Route::Home;
                }
            }
            Err(e) => {
                error!("Failed to delete month: {}", e);
                self.ui_state.set_error(e.to_string());
            }
        }
    }

    /// Hand the month over to the expenses page
    pub fn open_expenses(&mut self, token: MonthYearToken) {
        let route = Route::Expenses(token);
        info!("Navigating to {}", route.path());
        self.route = route;
    }

    pub fn go_home(&mut self) {
        self.route = Route::Home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_app() -> BudgetBookApp {
        let backend = Backend::in_memory().expect("Failed to create backend");
        let mut app = BudgetBookApp::new(backend);
        app.picker_state = PickerState::starting_at(2024, 3);
        app
    }

    fn pick(app: &mut BudgetBookApp, year: i32, month: u32) {
        app.picker_state.year = year;
        app.picker_state.month = month;
        app.handle_month_picked();
    }

    fn month_strings(app: &BudgetBookApp) -> Vec<String> {
        app.months().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_picking_duplicate_shows_notice() {
        let mut app = setup_test_app();

        pick(&mut app, 2024, 3);
        assert_eq!(app.modal_state.notice, None);

        pick(&mut app, 2024, 3);
        assert_eq!(app.modal_state.notice.as_deref(), Some("This month-year is already selected!"));
        assert_eq!(month_strings(&app), vec!["2024-03"]);
        // The picker still shows what was picked
        assert_eq!(app.picker_state.last_picked, Some((2024, 3)));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = setup_test_app();
        pick(&mut app, 2024, 3);
        pick(&mut app, 2024, 4);

        let march: MonthYearToken = "2024-03".parse().unwrap();
        app.request_delete(march.clone());
        assert_eq!(app.modal_state.deletion_prompt().as_deref(), Some("Are you sure you want to delete 2024-03?"));

        app.resolve_pending_deletion(Confirmation::Declined);
        assert_eq!(app.modal_state.pending_deletion, None);
        assert_eq!(month_strings(&app), vec!["2024-03", "2024-04"]);

        app.request_delete(march);
        app.resolve_pending_deletion(Confirmation::Confirmed);
        assert_eq!(month_strings(&app), vec!["2024-04"]);
    }

    #[test]
    fn test_resolving_without_pending_deletion_is_noop() {
        let mut app = setup_test_app();
        pick(&mut app, 2024, 3);
        app.resolve_pending_deletion(Confirmation::Confirmed);
        assert_eq!(month_strings(&app), vec!["2024-03"]);
    }

    #[test]
    fn test_navigation_between_routes() {
        let mut app = setup_test_app();
        pick(&mut app, 2024, 3);
        let march: MonthYearToken = "2024-03".parse().unwrap();

        app.open_expenses(march.clone());
        assert_eq!(app.route.path(), "/expenses/2024-03");

        app.go_home();
        assert_eq!(app.route, Route::Home);

        // Deleting the month that is open sends the user back home
        app.open_expenses(march.clone());
        app.request_delete(march);
        app.resolve_pending_deletion(Confirmation::Confirmed);
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = setup_test_app();
        assert_eq!(app.theme(), ThemeFlag::Light);
        app.toggle_theme();
        assert_eq!(app.theme(), ThemeFlag::Dark);
        assert_eq!(app.ui_state.error_message, None);
    }
}
