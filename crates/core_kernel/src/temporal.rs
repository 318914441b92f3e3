//! Fiscal calendar and date encodings
//!
//! This module provides the calendar arithmetic used by every batch:
//! - Fiscal period: a month's 1-based position in a fiscal year that may
//!   start in any calendar month
//! - Compact dates: `YYYYMMDD`, the accounting-system encoding
//! - Display dates: a configurable chrono pattern for policyholder statements

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write};
use std::str::FromStr;
use thiserror::Error;

/// Errors related to calendar configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid month {0}: expected 1-12")]
    InvalidMonth(u32),

    #[error("Invalid date format pattern: {0:?}")]
    InvalidDateFormat(String),
}

/// Maps a calendar month to its fiscal period
///
/// The fiscal start month is always period 1 and the mapping wraps across
/// the calendar year boundary. Both inputs must already be in 1..=12.
///
/// ```
/// use core_kernel::fiscal_period;
///
/// assert_eq!(fiscal_period(12, 1), 12);
/// assert_eq!(fiscal_period(7, 7), 1);
/// assert_eq!(fiscal_period(3, 7), 9);
/// ```
pub fn fiscal_period(month: u32, fiscal_start_month: u32) -> u32 {
    ((month + 12 - fiscal_start_month) % 12) + 1
}

fn check_month(month: u32) -> Result<u32, TemporalError> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(TemporalError::InvalidMonth(month))
    }
}

/// A fiscal calendar anchored on a start month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FiscalCalendar {
    start_month: u32,
}

impl FiscalCalendar {
    /// Creates a calendar whose fiscal year starts in `start_month`
    ///
    /// # Errors
    ///
    /// Returns `TemporalError::InvalidMonth` if the month is outside 1-12
    pub fn new(start_month: u32) -> Result<Self, TemporalError> {
        Ok(Self {
            start_month: check_month(start_month)?,
        })
    }

    /// Calendar-year fiscal calendar (January start)
    pub fn calendar_year() -> Self {
        Self { start_month: 1 }
    }

    pub fn start_month(&self) -> u32 {
        self.start_month
    }

    /// Returns the fiscal period (1-12) containing the date
    pub fn period_of(&self, date: NaiveDate) -> u32 {
        fiscal_period(date.month(), self.start_month)
    }

    /// Returns the calendar year in which the fiscal year containing `date` began
    pub fn fiscal_year_of(&self, date: NaiveDate) -> i32 {
        if date.month() >= self.start_month {
            date.year()
        } else {
            date.year() - 1
        }
    }
}

impl Default for FiscalCalendar {
    fn default() -> Self {
        Self::calendar_year()
    }
}

impl TryFrom<u32> for FiscalCalendar {
    type Error = TemporalError;

    fn try_from(start_month: u32) -> Result<Self, Self::Error> {
        Self::new(start_month)
    }
}

impl From<FiscalCalendar> for u32 {
    fn from(calendar: FiscalCalendar) -> Self {
        calendar.start_month
    }
}

/// Encodes a date as `YYYYMMDD`
pub fn compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Encodes the month and year of a date as e.g. `September 2020`
pub fn month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// A validated chrono strftime pattern for display dates
///
/// Validation renders a sample date once at construction, so a pattern that
/// names an unknown specifier or a time-of-day/zone field never reaches
/// `format`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    /// Default display pattern (`01/31/2020`)
    pub const DEFAULT_PATTERN: &'static str = "%m/%d/%Y";

    /// Parses and validates a strftime pattern
    ///
    /// # Errors
    ///
    /// Returns `TemporalError::InvalidDateFormat` if chrono cannot render the pattern
    pub fn new(pattern: impl Into<String>) -> Result<Self, TemporalError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(TemporalError::InvalidDateFormat(pattern));
        }
        // chrono signals unrenderable items with fmt::Error
        let mut sample = String::new();
        if write!(sample, "{}", NaiveDate::default().format(&pattern)).is_err() {
            return Err(TemporalError::InvalidDateFormat(pattern));
        }
        Ok(Self(pattern))
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }

    /// Encodes a date with this pattern
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.0).to_string()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(Self::DEFAULT_PATTERN.to_string())
    }
}

impl FromStr for DateFormat {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for DateFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DateFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateFormat::new(s).map_err(serde::de::Error::custom)
    }
}
