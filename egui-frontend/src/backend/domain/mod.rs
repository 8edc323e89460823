//! # Domain Module
//!
//! Business rules of BUDGETbook:
//!
//! - [`ThemeService`] - the persisted light/dark preference
//! - [`MonthLedgerService`] - the ordered, duplicate-free list of months and
//!   the cascading cleanup of a month's expense records on delete

pub mod commands;
pub mod month_ledger_service;
pub mod theme_service;

pub use month_ledger_service::{LedgerResult, MonthLedgerError, MonthLedgerService};
pub use theme_service::ThemeService;
