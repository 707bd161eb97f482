//! Gateways for talking to the GitHub REST API through Octocrab.
//!
//! The traits are the seams the intake layer depends on, so tests can swap
//! in mocks while [`OctocrabGateway`] performs real HTTP requests.

mod client;
mod error_mapping;
mod pull_requests;
mod teams;

pub use client::OctocrabGateway;
pub use pull_requests::{
    ListPullRequestsParams, PullRequestPage, PullRequestSort, PullRequestState, SortDirection,
};

use async_trait::async_trait;

use crate::github::error::IntakeError;
use crate::github::locator::{OrganisationLocator, PullRequestNumber, RepositoryLocator};
use crate::github::models::{Review, Team, TeamRepository};

/// Gateway for repository pull requests and their reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Fetch one page of pull requests.
    async fn list_pull_requests(
        &self,
        locator: &RepositoryLocator,
        params: &ListPullRequestsParams,
    ) -> Result<PullRequestPage, IntakeError>;

    /// Fetch the reviews submitted on a pull request in a single request.
    async fn list_reviews(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Vec<Review>, IntakeError>;
}

/// Gateway for organisation teams.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamGateway: Send + Sync {
    /// Fetch the teams of an organisation in a single request.
    async fn list_teams(&self, organisation: &OrganisationLocator)
    -> Result<Vec<Team>, IntakeError>;

    /// Fetch the repositories of a team in a single request.
    async fn list_team_repositories(&self, team_id: u64)
    -> Result<Vec<TeamRepository>, IntakeError>;
}
