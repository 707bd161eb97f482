//! Cutoff date bounding pull request enumeration.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use super::error::IntakeError;

/// Calendar date (UTC midnight) before which pull requests are not exported.
///
/// Only pull requests created strictly after the cutoff instant are admitted.
///
/// # Example
///
/// ```
/// use prharvest::github::CutoffDate;
///
/// let cutoff: CutoffDate = "2019-06-01".parse().expect("valid date");
/// assert_eq!(cutoff.to_string(), "2019-06-01");
/// assert_eq!(cutoff.month_day_label(), "June-1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CutoffDate(NaiveDate);

impl CutoffDate {
    /// Wraps a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Midnight UTC at the start of the cutoff date.
    #[must_use]
    pub fn instant(self) -> DateTime<Utc> {
        self.0.and_time(chrono::NaiveTime::MIN).and_utc()
    }

    /// Returns true when `created_at` falls strictly after the cutoff.
    #[must_use]
    pub fn admits(self, created_at: DateTime<Utc>) -> bool {
        created_at > self.instant()
    }

    /// Month name and unpadded day, e.g. `June-1`.
    #[must_use]
    pub fn month_day_label(self) -> String {
        self.0.format("%B-%-d").to_string()
    }
}

impl Default for CutoffDate {
    fn default() -> Self {
        Self(NaiveDate::from_ymd_opt(2019, 6, 1).unwrap_or(NaiveDate::MIN))
    }
}

impl FromStr for CutoffDate {
    type Err = IntakeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| IntakeError::InvalidCutoff {
                value: value.to_owned(),
            })
    }
}

impl fmt::Display for CutoffDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
