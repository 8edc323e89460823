//! Access to the `expenses-<YYYY-MM>` record sets owned by the expenses page.
//!
//! The ledger only ever deletes these keys; their contents are opaque here.

use anyhow::Result;
use log::info;
use shared::MonthYearToken;
use std::sync::Arc;

use crate::backend::storage::traits::KeyValueStorage;

#[derive(Clone)]
pub struct ExpenseRecordRepository {
    storage: Arc<dyn KeyValueStorage>,
}

impl ExpenseRecordRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Delete the record set for `token`
    /// Returns true if a record set existed
    pub fn delete_records(&self, token: &MonthYearToken) -> Result<bool> {
        let removed = self.storage.remove(&token.expenses_key())?;
        if removed {
            info!("Removed expense records for {}", token);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::MemoryStorage;

    #[test]
    fn test_delete_records_only_touches_matching_key() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("expenses-2024-03", r#"[{"name":"rent","amount":900}]"#).unwrap();
        storage.set("expenses-2024-04", "[]").unwrap();

        let repo = ExpenseRecordRepository::new(storage.clone());
        let march: MonthYearToken = "2024-03".parse().unwrap();

        assert!(repo.delete_records(&march).unwrap());
        assert!(!repo.delete_records(&march).unwrap());
        assert_eq!(storage.get("expenses-2024-03").unwrap(), None);
        assert_eq!(storage.get("expenses-2024-04").unwrap(), Some("[]".to_string()));
    }
}
