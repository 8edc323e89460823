//! # Storage Module
//!
//! Handles all data persistence for BUDGETbook.
//!
//! Persistence is a local key/value store behind the [`KeyValueStorage`]
//! trait, so the backend can be swapped (files on disk, memory for tests)
//! without affecting the domain services or the UI.
//!
//! ## Keys
//!
//! - `theme` - `light` | `dark`
//! - `selectedMonths` - JSON array of `YYYY-MM` strings
//! - `expenses-<YYYY-MM>` - owned by the expenses page; only ever deleted here

pub mod file_store;
pub mod memory;
pub mod repositories;
pub mod traits;

pub use file_store::FileStorage;
pub use memory::MemoryStorage;
pub use repositories::{ExpenseRecordRepository, MonthLedgerRepository, ThemeRepository};
pub use traits::KeyValueStorage;
