//! # Backend Module
//!
//! Direct, synchronous access to the domain services and storage for the
//! egui frontend:
//! - No async/await and no IO/REST layer
//! - Storage is pluggable through [`storage::KeyValueStorage`]

use anyhow::Result;
use log::info;
use std::path::Path;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub theme_service: domain::ThemeService,
    pub month_ledger_service: domain::MonthLedgerService,
}

impl Backend {
    /// Create a backend over any key/value storage
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Result<Self> {
        let theme_service = domain::ThemeService::new(storage::ThemeRepository::new(storage.clone()))?;
        let month_ledger_service = domain::MonthLedgerService::new(
            storage::MonthLedgerRepository::new(storage.clone()),
            storage::ExpenseRecordRepository::new(storage),
        )?;

        Ok(Backend {
            theme_service,
            month_ledger_service,
        })
    }

    /// Create a backend storing its keys as files under `data_directory`
    pub fn with_data_directory<P: AsRef<Path>>(data_directory: P) -> Result<Self> {
        let file_storage = FileStorage::new(data_directory)?;
        info!("Using data directory: {}", file_storage.base_directory().display());
        Self::new(Arc::new(file_storage))
    }

    /// Create a backend over fresh in-memory storage
    pub fn in_memory() -> Result<Self> {
        Self::new(Arc::new(MemoryStorage::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::commands::ledger::{Confirmation, DeleteMonthCommand};
    use shared::ThemeFlag;
    use tempfile::TempDir;

    #[test]
    fn test_unreadable_files_start_with_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(temp_dir.path().join("theme"), [0xff, 0xfe]).unwrap();
        std::fs::write(temp_dir.path().join("selectedMonths"), [0xff, 0xfe]).unwrap();

        let mut backend = Backend::with_data_directory(temp_dir.path()).unwrap();
        assert_eq!(backend.theme_service.get(), ThemeFlag::Light);
        assert!(backend.month_ledger_service.list_months().is_empty());

        // Writes replace the unreadable values
        backend.theme_service.toggle().unwrap();
        backend.month_ledger_service.add_year_month(2024, 3).unwrap();
        let reopened = Backend::with_data_directory(temp_dir.path()).unwrap();
        assert_eq!(reopened.theme_service.get(), ThemeFlag::Dark);
        assert_eq!(reopened.month_ledger_service.list_months().len(), 1);
    }

    #[test]
    fn test_file_backed_state_survives_restart() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        {
            let mut backend = Backend::with_data_directory(temp_dir.path()).unwrap();
            backend.theme_service.toggle().unwrap();
            backend.month_ledger_service.add_year_month(2024, 3).unwrap();
            backend.month_ledger_service.add_year_month(2024, 4).unwrap();
        }
        std::fs::write(temp_dir.path().join("expenses-2024-03"), "[]").unwrap();

        let mut backend = Backend::with_data_directory(temp_dir.path()).unwrap();
        assert_eq!(backend.theme_service.get(), ThemeFlag::Dark);
        let months: Vec<String> = backend
            .month_ledger_service
            .list_months()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(months, vec!["2024-03", "2024-04"]);

        backend
            .month_ledger_service
            .delete_month(DeleteMonthCommand {
                token: "2024-03".parse().unwrap(),
                confirmation: Confirmation::Confirmed,
            })
            .unwrap();
        assert!(!temp_dir.path().join("expenses-2024-03").exists());
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("selectedMonths")).unwrap(),
            r#"["2024-04"]"#
        );
    }
}
