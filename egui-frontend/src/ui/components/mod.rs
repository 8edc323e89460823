//! # Components Module
//!
//! Rendering for each part of the window. Each component adds `render_*`
//! methods to [`BudgetBookApp`](crate::ui::app_state::BudgetBookApp).

pub mod header;
pub mod modals;
pub mod month_picker;
pub mod month_tiles;
pub mod theme;

pub use theme::{apply_theme, Palette};
