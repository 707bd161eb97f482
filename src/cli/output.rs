//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use camino::Utf8Path;
use prharvest::{ExportReport, IntakeError, TeamRepository};

/// Writes the repositories of a team, one `<full_name> (<html_url>)` per line.
///
/// Repositories without a full name fall back to their short name.
pub fn write_team_repositories<W: Write>(
    writer: &mut W,
    team: &str,
    organisation: &str,
    repositories: &[TeamRepository],
) -> Result<(), IntakeError> {
    writeln!(writer, "Repositories for team {team} in {organisation}:")
        .map_err(|e| io_error(&e))?;

    for repository in repositories {
        let name = repository
            .full_name
            .as_deref()
            .unwrap_or(repository.name.as_str());
        let url = repository.html_url.as_deref().unwrap_or("no HTML URL");
        writeln!(writer, "{name} ({url})").map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Writes a summary of a finished export, with extra lines for skipped
/// rows and unexported approvals.
pub fn write_export_summary<W: Write>(
    writer: &mut W,
    repository: &str,
    path: &Utf8Path,
    report: &ExportReport,
) -> Result<(), IntakeError> {
    writeln!(
        writer,
        "Exported {} pull requests from {repository} to {path}",
        report.rows_written
    )
    .map_err(|e| io_error(&e))?;

    if report.rows_skipped > 0 {
        writeln!(writer, "Skipped {} rows that could not be written.", report.rows_skipped)
            .map_err(|e| io_error(&e))?;
    }

    if report.additional_approvals > 0 {
        writeln!(
            writer,
            "{} approvals after the first were not exported.",
            report.additional_approvals
        )
        .map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Converts an I/O error to an [`IntakeError::Io`].
pub(crate) fn io_error(error: &io::Error) -> IntakeError {
    IntakeError::Io {
        message: error.to_string(),
    }
}
