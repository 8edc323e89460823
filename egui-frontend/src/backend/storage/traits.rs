//! # Storage Traits
//!
//! This module defines the storage abstraction that allows different
//! key/value backends to be used interchangeably by the repositories.

use anyhow::Result;

/// Interface of a local, string-valued key/value store
///
/// Absence of a key is reported as `Ok(None)`, never as an error. Every
/// mutation is written through synchronously before the call returns.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`
    /// Returns true if the key existed, false otherwise
    fn remove(&self, key: &str) -> Result<bool>;
}
