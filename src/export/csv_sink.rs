//! CSV sink for pull request rows.

use std::fs::File;
use std::io::Write;

use camino::Utf8Path;

use crate::github::IntakeError;

use super::model::{HEADER, PullRequestRow};

/// Destination for exported rows.
///
/// The enumeration treats a failed [`RowSink::write_row`] as skippable, and a
/// failed [`RowSink::flush`] as fatal.
pub trait RowSink {
    /// Appends one row.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Io`] when the row cannot be written.
    fn write_row(&mut self, row: &PullRequestRow) -> Result<(), IntakeError>;

    /// Pushes buffered rows to the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Io`] when flushing fails.
    fn flush(&mut self) -> Result<(), IntakeError>;
}

/// Comma-delimited writer that emits [`HEADER`] on construction.
pub struct CsvRowSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvRowSink<W> {
    /// Wraps `writer` and writes the header record.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Io`] when the header cannot be written.
    pub fn new(writer: W) -> Result<Self, IntakeError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer
            .write_record(HEADER)
            .map_err(|error| csv_error("write header", &error))?;
        Ok(Self { writer: csv_writer })
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Io`] when the final flush fails.
    pub fn into_inner(self) -> Result<W, IntakeError> {
        self.writer.into_inner().map_err(|error| IntakeError::Io {
            message: format!("finish CSV output: {}", error.error()),
        })
    }
}

impl CsvRowSink<File> {
    /// Creates (or truncates) the file at `path` and writes the header.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Io`] when the file cannot be created or the
    /// header cannot be written.
    pub fn create(path: &Utf8Path) -> Result<Self, IntakeError> {
        let file = File::create(path).map_err(|error| IntakeError::Io {
            message: format!("failed to create output file '{path}': {error}"),
        })?;
        Self::new(file)
    }
}

impl<W: Write> RowSink for CsvRowSink<W> {
    fn write_row(&mut self, row: &PullRequestRow) -> Result<(), IntakeError> {
        self.writer
            .serialize(row)
            .map_err(|error| csv_error("write row", &error))
    }

    fn flush(&mut self) -> Result<(), IntakeError> {
        self.writer.flush().map_err(|error| IntakeError::Io {
            message: format!("failed to flush CSV output: {error}"),
        })
    }
}

fn csv_error(operation: &str, error: &csv::Error) -> IntakeError {
    IntakeError::Io {
        message: format!("{operation} failed: {error}"),
    }
}
