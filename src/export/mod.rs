//! CSV export of pull request and review data.
//!
//! Each processed pull request becomes one [`PullRequestRow`] with a fixed
//! set of columns (see [`HEADER`]). Rows are written through a [`RowSink`];
//! [`CsvRowSink`] is the file-backed implementation used by the CLI.

mod csv_sink;
mod file_name;
mod model;

pub use csv_sink::{CsvRowSink, RowSink};
pub use file_name::export_file_name;
pub use model::{Approval, HEADER, PullRequestRow, ReviewSummary};
