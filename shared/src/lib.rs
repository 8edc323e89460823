//! # Shared Types
//!
//! Plain data types used by both the backend and the UI layer:
//!
//! - [`MonthYearToken`] - the `YYYY-MM` key identifying a budgeting period
//! - [`ThemeFlag`] - the persisted light/dark display preference
//! - storage key names shared with the external expenses page

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage key holding the persisted theme (`light` or `dark`)
pub const THEME_KEY: &str = "theme";

/// Storage key holding the JSON list of selected month-year tokens
pub const SELECTED_MONTHS_KEY: &str = "selectedMonths";

/// Prefix of the storage keys owned by the expenses page
pub const EXPENSES_KEY_PREFIX: &str = "expenses-";

/// Errors produced when building a [`MonthYearToken`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("'{0}' is not formatted as YYYY-MM")]
    Malformed(String),
    #[error("year {0} is outside 1..=9999")]
    YearOutOfRange(i32),
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u32),
}

/// Month-year token in format: "YYYY-MM" (zero-padded month)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthYearToken {
    year: i32,
    month: u32,
}

impl MonthYearToken {
    /// Build a token from a calendar year and a 1-based month
    pub fn from_year_month(year: i32, month: u32) -> Result<Self, TokenError> {
        if !(1..=9999).contains(&year) {
            return Err(TokenError::YearOutOfRange(year));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(TokenError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Storage key of the expense record set tied to this month
    pub fn expenses_key(&self) -> String {
        format!("{}{}", EXPENSES_KEY_PREFIX, self)
    }
}

impl fmt::Display for MonthYearToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthYearToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TokenError::Malformed(s.to_string());

        let (year_part, month_part) = s.split_once('-').ok_or_else(malformed)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if year_part.len() != 4 || month_part.len() != 2 || !all_digits(year_part) || !all_digits(month_part) {
            return Err(malformed());
        }

        let year = year_part.parse::<i32>().map_err(|_| malformed())?;
        let month = month_part.parse::<u32>().map_err(|_| malformed())?;
        Self::from_year_month(year, month)
    }
}

impl TryFrom<String> for MonthYearToken {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthYearToken> for String {
    fn from(token: MonthYearToken) -> Self {
        token.to_string()
    }
}

/// Display preference persisted across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeFlag {
    #[default]
    Light,
    Dark,
}

impl ThemeFlag {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            ThemeFlag::Light => ThemeFlag::Dark,
            ThemeFlag::Dark => ThemeFlag::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeFlag::Light => "light",
            ThemeFlag::Dark => "dark",
        }
    }

    /// Parse the persisted representation; unknown values yield `None`
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeFlag::Light),
            "dark" => Some(ThemeFlag::Dark),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeFlag::Dark
    }
}

impl fmt::Display for ThemeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
