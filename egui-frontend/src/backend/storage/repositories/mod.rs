pub mod expense_record_repository;
pub mod month_ledger_repository;
pub mod theme_repository;

pub use expense_record_repository::ExpenseRecordRepository;
pub use month_ledger_repository::MonthLedgerRepository;
pub use theme_repository::ThemeRepository;
