//! Naming of per-repository export files.

use chrono::NaiveDate;

use crate::github::{CutoffDate, RepositoryName};

/// Builds `<repo>-<cutoffMonth>-<cutoffDay>-<nowMonth>-<nowDay>.csv`.
///
/// Months are English names and days are not zero-padded, so a June 1st
/// cutoff exported on October 18th for `widgets` yields
/// `widgets-June-1-October-18.csv`.
#[must_use]
pub fn export_file_name(
    repository: &RepositoryName,
    cutoff: CutoffDate,
    today: NaiveDate,
) -> String {
    format!(
        "{repo}-{cutoff}-{today}.csv",
        repo = repository.as_str(),
        cutoff = cutoff.month_day_label(),
        today = CutoffDate::new(today).month_day_label()
    )
}
