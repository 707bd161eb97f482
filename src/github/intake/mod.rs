//! High-level intake facades used by the CLI.

mod pull_requests;
mod teams;

pub use pull_requests::{ExportReport, PageOutcome, PullRequestIntake};
pub use teams::TeamIntake;
