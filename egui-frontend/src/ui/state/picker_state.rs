//! # Picker State Module
//!
//! Year/month selection of the month picker, plus the last value the user
//! picked (kept even when adding it was rejected).

use chrono::{Datelike, Local};

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    pub year: i32,
    /// 1-based month
    pub month: u32,
    /// Last (year, month) the user picked
    pub last_picked: Option<(i32, u32)>,
}

impl PickerState {
    /// Picker positioned on the current local month
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self::starting_at(today.year(), today.month())
    }

    pub fn starting_at(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            last_picked: None,
        }
    }

    /// Years offered by the year selector
    pub fn year_range(&self) -> std::ops::RangeInclusive<i32> {
        (self.year - 10).max(1)..=(self.year + 10).min(9999)
    }

    /// Text of the picker field, `YYYY-MM` placeholder until something is picked
    pub fn display_text(&self) -> String {
        match self.last_picked {
            Some((year, month)) => format!("{:02}/{:04}", month, year),
            None => "YYYY-MM".to_string(),
        }
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        let mut picker = PickerState::starting_at(2024, 3);
        assert_eq!(picker.display_text(), "YYYY-MM");

        picker.last_picked = Some((2024, 3));
        assert_eq!(picker.display_text(), "03/2024");
    }

    #[test]
    fn test_year_range_is_clamped() {
        assert_eq!(PickerState::starting_at(2024, 1).year_range(), 2014..=2034);
        assert_eq!(PickerState::starting_at(3, 1).year_range(), 1..=13);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "?");
    }
}
