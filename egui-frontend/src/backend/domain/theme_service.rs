use anyhow::Result;
use log::info;
use shared::ThemeFlag;

use crate::backend::storage::ThemeRepository;

/// Process-wide light/dark flag, read once at start-up and written through on every toggle
#[derive(Clone)]
pub struct ThemeService {
    theme_repository: ThemeRepository,
    current: ThemeFlag,
}

impl ThemeService {
    /// Create a new ThemeService from the persisted theme, falling back to light
    pub fn new(theme_repository: ThemeRepository) -> Result<Self> {
        let current = theme_repository.load_theme()?.unwrap_or_default();
        info!("Loaded theme: {}", current);

        Ok(Self {
            theme_repository,
            current,
        })
    }

    pub fn get(&self) -> ThemeFlag {
        self.current
    }

    /// Flip the theme and persist it
    /// On a failed write the current theme is left unchanged
    pub fn toggle(&mut self) -> Result<ThemeFlag> {
        let next = self.current.toggled();
        self.theme_repository.save_theme(next)?;
        self.current = next;

        info!("Theme switched to {}", next);
        Ok(next)
    }
}
