//! # Month Ledger Service
//!
//! Owns the ordered set of months the user has created.
//!
//! - Months are kept in insertion order; no sorting is applied.
//! - A month can only be present once; a repeated add is rejected.
//! - Deleting a month needs an explicit confirmation and also deletes the
//!   `expenses-<YYYY-MM>` record set tied to it.
//!
//! Every mutation persists the new list before updating the in-memory copy,
//! so a failed write leaves the ledger as it was. A delete removes the expense
//! records before the month, so a month never disappears while its records
//! remain.

use log::{info, warn};
use shared::{MonthYearToken, TokenError};

use crate::backend::domain::commands::ledger::{
    AddMonthCommand, AddMonthResult, Confirmation, DeleteMonthCommand, DeleteMonthOutcome,
    DeleteMonthResult,
};
use crate::backend::storage::{ExpenseRecordRepository, MonthLedgerRepository};

/// Errors reported by ledger operations
#[derive(Debug, thiserror::Error)]
pub enum MonthLedgerError {
    #[error("This month-year is already selected! ({0})")]
    AlreadyExists(MonthYearToken),
    #[error("Invalid month-year: {0}")]
    InvalidToken(#[from] TokenError),
    #[error("Storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type LedgerResult<T> = Result<T, MonthLedgerError>;

#[derive(Clone)]
pub struct MonthLedgerService {
    ledger_repository: MonthLedgerRepository,
    expense_repository: ExpenseRecordRepository,
    months: Vec<MonthYearToken>,
}

impl MonthLedgerService {
    /// Create a new MonthLedgerService, reading the persisted ledger once
    pub fn new(
        ledger_repository: MonthLedgerRepository,
        expense_repository: ExpenseRecordRepository,
    ) -> LedgerResult<Self> {
        let months = ledger_repository.load_months()?;
        info!("Loaded {} months", months.len());

        Ok(Self {
            ledger_repository,
            expense_repository,
            months,
        })
    }

    /// Current ledger in insertion order
    pub fn list_months(&self) -> Vec<MonthYearToken> {
        self.months.clone()
    }

    pub fn contains(&self, token: &MonthYearToken) -> bool {
        self.months.contains(token)
    }

    /// Append a month to the ledger
    pub fn add_month(&mut self, command: AddMonthCommand) -> LedgerResult<AddMonthResult> {
        let token = command.token;
        info!("Adding month: {}", token);

        if self.contains(&token) {
            warn!("Month already selected: {}", token);
            return Err(MonthLedgerError::AlreadyExists(token));
        }

        let mut months = self.months.clone();
        months.push(token.clone());
        self.ledger_repository.save_months(&months)?;
        self.months = months;

        info!("Added month {} ({} total)", token, self.months.len());

        Ok(AddMonthResult {
            token,
            months: self.list_months(),
        })
    }

    /// Derive the `YYYY-MM` token from a calendar year and 1-based month, then add it
    pub fn add_year_month(&mut self, year: i32, month: u32) -> LedgerResult<AddMonthResult> {
        let token = MonthYearToken::from_year_month(year, month)?;
        self.add_month(AddMonthCommand { token })
    }

    /// Remove a month and its expense records, once the user has confirmed
    pub fn delete_month(&mut self, command: DeleteMonthCommand) -> LedgerResult<DeleteMonthResult> {
        let token = command.token;

        if command.confirmation == Confirmation::Declined {
            info!("Deletion of {} cancelled", token);
            return Ok(self.delete_result(DeleteMonthOutcome::Cancelled));
        }

        info!("Deleting month: {}", token);

        let Some(position) = self.months.iter().position(|m| *m == token) else {
            warn!("Month not found: {}", token);
            return Ok(self.delete_result(DeleteMonthOutcome::NotFound));
        };

        // Records go first so a failure leaves the month listed and the delete retryable
        self.expense_repository.delete_records(&token)?;

        let mut months = self.months.clone();
        months.remove(position);
        self.ledger_repository.save_months(&months)?;
        self.months = months;

        info!("Deleted month {} ({} remaining)", token, self.months.len());

        Ok(self.delete_result(DeleteMonthOutcome::Deleted))
    }

    fn delete_result(&self, outcome: DeleteMonthOutcome) -> DeleteMonthResult {
        DeleteMonthResult {
            outcome,
            months: self.list_months(),
        }
    }
}
