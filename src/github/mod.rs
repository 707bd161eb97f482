//! GitHub pull request and team intake.
//!
//! This module wraps Octocrab to page through a repository's pull requests,
//! fetch their reviews, and resolve organisation teams to the repositories
//! they own. Errors are mapped into user-friendly variants so that callers
//! can surface precise failures without exposing Octocrab internals.

pub mod cutoff;
pub mod error;
pub mod gateway;
pub mod intake;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod rate_limit;

pub use cutoff::CutoffDate;
pub use error::IntakeError;
pub use gateway::{
    ListPullRequestsParams, OctocrabGateway, PullRequestGateway, PullRequestPage, TeamGateway,
};
pub use intake::{ExportReport, PullRequestIntake, TeamIntake};
pub use locator::{
    DEFAULT_API_BASE, OrganisationLocator, PersonalAccessToken, PullRequestNumber,
    RepositoryLocator, RepositoryName, RepositoryOwner, TeamName, parse_api_base,
};
pub use models::{PullRequestRecord, Review, ReviewState, Team, TeamRepository};
pub use pagination::PageInfo;
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use gateway::{MockPullRequestGateway, MockTeamGateway};
