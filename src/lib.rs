//! prharvest library crate exporting GitHub pull request review data.
//!
//! The library wraps Octocrab to page through a repository's pull requests
//! newest first, summarise each pull request's reviews into a fixed-width
//! CSV row, and resolve organisation teams to the repositories they own.
//! Errors are surfaced as [`IntakeError`] values that the CLI can display.

pub mod config;
pub mod export;
pub mod github;
pub mod telemetry;

pub use config::{OperationMode, PrharvestConfig};
pub use github::{
    CutoffDate, ExportReport, IntakeError, ListPullRequestsParams, OctocrabGateway,
    OrganisationLocator, PersonalAccessToken, PullRequestGateway, PullRequestIntake,
    PullRequestNumber, PullRequestRecord, RepositoryLocator, RepositoryName, RepositoryOwner,
    Review, ReviewState, Team, TeamGateway, TeamIntake, TeamName, TeamRepository, parse_api_base,
};
