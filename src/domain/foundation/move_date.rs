//! Calendar date value object for move dates.
//!
//! Move dates have day granularity only; no time-of-day semantics.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A calendar date on which a household moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveDate(NaiveDate);

impl MoveDate {
    /// Creates a move date from a NaiveDate.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns today's date (UTC).
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Parses a move date from `YYYY-MM-DD`.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ValidationError::invalid_format("move_date", "expected YYYY-MM-DD"))
    }

    /// Returns the inner NaiveDate.
    pub fn as_date(&self) -> &NaiveDate {
        &self.0
    }

    /// Returns the number of days from this date until `other`.
    ///
    /// Negative if `other` is earlier.
    pub fn days_until(&self, other: &MoveDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Checks if this date is strictly after another.
    pub fn is_after(&self, other: &MoveDate) -> bool {
        self.0 > other.0
    }

    /// Returns the ISO-8601 week this date falls in, as (year, week number).
    ///
    /// ISO weeks start on Monday; week 1 contains the year's first Thursday.
    pub fn iso_week_key(&self) -> (i32, u32) {
        let week = self.0.iso_week();
        (week.year(), week.week())
    }

    /// Returns a new date shifted by the given number of days.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + chrono::Duration::days(days))
    }
}

impl fmt::Display for MoveDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
