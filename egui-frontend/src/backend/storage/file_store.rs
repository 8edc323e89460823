//! # File Key/Value Store
//!
//! Production storage backend: one file per key inside the data directory.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── theme                 ← "light" | "dark"
//! ├── selectedMonths        ← ["2024-03","2024-04"]
//! └── expenses-2024-03      ← owned by the expenses page
//! ```
//!
//! Writes use the atomic pattern: write `<key>.tmp`, then rename over `<key>`.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::traits::KeyValueStorage;

/// FileStorage maps each key to a file under a base directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_directory: PathBuf,
}

impl FileStorage {
    /// Create a new file store, creating the base directory if it doesn't exist
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Resolve the file backing `key`, rejecting keys that are not plain file names
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            bail!("Invalid storage key '{}': only ASCII letters, digits, '-' and '_' are allowed", key);
        }
        Ok(self.base_directory.join(key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => {
                debug!("Read key '{}' from {:?}", key, path);
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let temp_path = path.with_extension("tmp");

        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Saved key '{}' to {:?}", key, path);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed key '{}' ({:?})", key, path);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}
