//! # Theme Configuration
//!
//! Centralized colors for BUDGETbook. The light/dark choice itself is owned
//! by the backend's theme service; this module only maps it to egui visuals.
//!
//! ## Usage
//! ```ignore
//! let palette = Palette::for_theme(app.theme());
//! ui.label(egui::RichText::new("BUDGETbook").color(palette.accent));
//! ```

use eframe::egui::{self, Color32};
use shared::ThemeFlag;

/// Colors used by the month page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Violet accent used by the header bar and month tiles
    pub accent: Color32,
    /// Text drawn on top of the accent color
    pub on_accent: Color32,
    /// Fill of the delete button
    pub danger: Color32,
    /// Main heading text
    pub heading: Color32,
}

impl Palette {
    pub fn for_theme(theme: ThemeFlag) -> Self {
        match theme {
            ThemeFlag::Light => Self {
                accent: Color32::from_rgb(139, 92, 246),
                on_accent: Color32::WHITE,
                danger: Color32::from_rgb(239, 68, 68),
                heading: Color32::from_rgb(30, 30, 30),
            },
            ThemeFlag::Dark => Self {
                accent: Color32::from_rgb(124, 58, 237),
                on_accent: Color32::from_rgb(245, 243, 255),
                danger: Color32::from_rgb(220, 38, 38),
                heading: Color32::from_rgb(235, 235, 235),
            },
        }
    }
}

/// Switch egui's visuals to match the theme
pub fn apply_theme(ctx: &egui::Context, theme: ThemeFlag) {
    let mut visuals = match theme {
        ThemeFlag::Light => egui::Visuals::light(),
        ThemeFlag::Dark => egui::Visuals::dark(),
    };
    visuals.selection.bg_fill = Palette::for_theme(theme).accent;
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_per_theme() {
        let light = Palette::for_theme(ThemeFlag::Light);
        let dark = Palette::for_theme(ThemeFlag::Dark);
        assert_ne!(light.heading, dark.heading);
        assert_eq!(light.accent, Color32::from_rgb(139, 92, 246));
    }
}
