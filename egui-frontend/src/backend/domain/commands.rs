//! Domain-level command and result types.
//! These structs are used by the services inside the domain layer; the UI
//! builds commands from user intent and renders the results.

pub mod ledger {
    use shared::MonthYearToken;

    /// Input for adding a month to the ledger.
    #[derive(Debug, Clone)]
    pub struct AddMonthCommand {
        pub token: MonthYearToken,
    }

    /// Result of a successful add.
    #[derive(Debug, Clone)]
    pub struct AddMonthResult {
        pub token: MonthYearToken,
        /// Ledger after the add, in insertion order
        pub months: Vec<MonthYearToken>,
    }

    /// Whether the user confirmed a destructive action.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Confirmation {
        Confirmed,
        Declined,
    }

    /// Input for deleting a month and its expense records.
    #[derive(Debug, Clone)]
    pub struct DeleteMonthCommand {
        pub token: MonthYearToken,
        pub confirmation: Confirmation,
    }

    /// What a delete request ended up doing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum DeleteMonthOutcome {
        /// Month removed and its expense records deleted
        Deleted,
        /// Month was not in the ledger; nothing changed
        NotFound,
        /// User declined the confirmation; nothing changed
        Cancelled,
    }

    /// Result of a delete request.
    #[derive(Debug, Clone)]
    pub struct DeleteMonthResult {
        pub outcome: DeleteMonthOutcome,
        /// Ledger after the request, in insertion order
        pub months: Vec<MonthYearToken>,
    }
}
