//! # UI Module
//!
//! egui presentation layer: renders the theme switch, the month picker and
//! the month tiles, and forwards user intent to the backend services.

pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod navigation;
pub mod state;

pub use app_state::BudgetBookApp;
pub use navigation::{ExpensesPage, ExpensesPageAction, ExternalExpensesPage, Route};
