//! # Month Ledger Repository
//!
//! Stores the ordered list of selected months as a JSON array of strings
//! under the `selectedMonths` key, e.g. `["2024-03","2024-04"]`.
//!
//! Loading is forgiving: an unreadable value or invalid JSON is treated like
//! an empty ledger, and malformed or repeated entries are dropped, so callers
//! always receive a list of well-formed, unique tokens in stored order.

use anyhow::{Context, Result};
use log::warn;
use shared::{MonthYearToken, SELECTED_MONTHS_KEY};
use std::collections::HashSet;
use std::sync::Arc;

use crate::backend::storage::traits::KeyValueStorage;

#[derive(Clone)]
pub struct MonthLedgerRepository {
    storage: Arc<dyn KeyValueStorage>,
}

impl MonthLedgerRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Load the stored months in insertion order
    pub fn load_months(&self) -> Result<Vec<MonthYearToken>> {
        let raw = match self.storage.get(SELECTED_MONTHS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => {
                warn!("Could not read stored month list ({:#}); starting empty", e);
                return Ok(Vec::new());
            }
        };

        let entries: Vec<String> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Stored month list is not a JSON string array ({}); starting empty", e);
                return Ok(Vec::new());
            }
        };

        let mut seen = HashSet::new();
        let mut months = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry.parse::<MonthYearToken>() {
                Ok(token) if seen.insert(token.clone()) => months.push(token),
                Ok(token) => warn!("Dropping duplicate stored month {}", token),
                Err(e) => warn!("Dropping stored month: {}", e),
            }
        }

        Ok(months)
    }

    /// Replace the stored list with `months`
    pub fn save_months(&self, months: &[MonthYearToken]) -> Result<()> {
        let json = serde_json::to_string(months).context("Failed to serialize month list")?;
        self.storage.set(SELECTED_MONTHS_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::MemoryStorage;

    fn token(s: &str) -> MonthYearToken {
        s.parse().unwrap()
    }

    fn setup_test_repo() -> (MonthLedgerRepository, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (MonthLedgerRepository::new(storage.clone()), storage)
    }

    #[test]
    fn test_missing_key_is_empty_ledger() {
        let (repo, _storage) = setup_test_repo();
        assert!(repo.load_months().unwrap().is_empty());
    }

    #[test]
    fn test_save_writes_json_array() {
        let (repo, storage) = setup_test_repo();
        repo.save_months(&[token("2024-04"), token("2023-11")]).unwrap();

        assert_eq!(
            storage.get(SELECTED_MONTHS_KEY).unwrap(),
            Some(r#"["2024-04","2023-11"]"#.to_string())
        );
        assert_eq!(repo.load_months().unwrap(), vec![token("2024-04"), token("2023-11")]);
    }

    #[test]
    fn test_load_drops_malformed_and_duplicate_entries() {
        let (repo, storage) = setup_test_repo();
        storage
            .set(SELECTED_MONTHS_KEY, r#"["2024-03","bogus","2024-3","2024-03","2024-05"]"#)
            .unwrap();

        assert_eq!(repo.load_months().unwrap(), vec![token("2024-03"), token("2024-05")]);
    }

    struct UnreadableStorage;

    impl KeyValueStorage for UnreadableStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Err(anyhow::anyhow!("permission denied reading {}", key))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Ok(())
        }

        fn remove(&self, _key: &str) -> Result<bool> {
            Ok(false)
        }
    }

    #[test]
    fn test_load_treats_unreadable_value_as_empty() {
        let repo = MonthLedgerRepository::new(Arc::new(UnreadableStorage));
        assert!(repo.load_months().unwrap().is_empty());
    }

    #[test]
    fn test_load_treats_corrupt_json_as_empty() {
        let (repo, storage) = setup_test_repo();
        storage.set(SELECTED_MONTHS_KEY, "{not json").unwrap();
        assert!(repo.load_months().unwrap().is_empty());
    }
}
