//! Persistence of the light/dark preference under the `theme` key.

use anyhow::Result;
use log::warn;
use shared::{ThemeFlag, THEME_KEY};
use std::sync::Arc;

use crate::backend::storage::traits::KeyValueStorage;

#[derive(Clone)]
pub struct ThemeRepository {
    storage: Arc<dyn KeyValueStorage>,
}

impl ThemeRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Load the stored theme
    /// Returns None if nothing usable is stored; an unreadable value counts as absent
    pub fn load_theme(&self) -> Result<Option<ThemeFlag>> {
        let raw = match self.storage.get(THEME_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(None),
            Err(e) => {
                warn!("Could not read stored theme ({:#}); using default", e);
                return Ok(None);
            }
        };

        let theme = ThemeFlag::from_stored(raw.trim());
        if theme.is_none() {
            warn!("Ignoring unrecognized stored theme '{}'", raw);
        }
        Ok(theme)
    }

    pub fn save_theme(&self, theme: ThemeFlag) -> Result<()> {
        self.storage.set(THEME_KEY, theme.as_str())
    }
}
