//! Shared test utilities for CLI tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use prharvest::github::{PageInfo, PullRequestPage, Team, TeamGateway, TeamRepository};
use prharvest::{
    IntakeError, ListPullRequestsParams, OrganisationLocator, PullRequestGateway,
    PullRequestNumber, PullRequestRecord, RepositoryLocator, Review,
};

/// A stub gateway returning canned data for every endpoint.
///
/// Pull requests are served as a single page. Reviews are filtered by pull
/// request number. Every requested repository is recorded.
#[derive(Clone, Default)]
pub struct StubGateway {
    pull_requests: Vec<PullRequestRecord>,
    reviews: Vec<Review>,
    teams: Vec<Team>,
    team_repositories: Vec<TeamRepository>,
    failure: Option<IntakeError>,
    /// `owner/repo` of every pull request listing request.
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl StubGateway {
    /// Gateway serving `pull_requests` on one page.
    pub fn with_pull_requests(pull_requests: Vec<PullRequestRecord>) -> Self {
        Self {
            pull_requests,
            ..Self::default()
        }
    }

    /// Gateway whose every call fails with `error`.
    pub fn failing(error: IntakeError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Adds reviews served by `list_reviews`.
    pub fn with_reviews(self, reviews: Vec<Review>) -> Self {
        Self { reviews, ..self }
    }

    /// Adds the organisation teams and the repositories of any team.
    pub fn with_teams(self, teams: Vec<Team>, team_repositories: Vec<TeamRepository>) -> Self {
        Self {
            teams,
            team_repositories,
            ..self
        }
    }

    fn check(&self) -> Result<(), IntakeError> {
        self.failure.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl PullRequestGateway for StubGateway {
    async fn list_pull_requests(
        &self,
        locator: &RepositoryLocator,
        params: &ListPullRequestsParams,
    ) -> Result<PullRequestPage, IntakeError> {
        self.check()?;
        self.requested
            .lock()
            .expect("requested mutex should be available")
            .push(format!(
                "{}/{}",
                locator.owner().as_str(),
                locator.repository().as_str()
            ));

        Ok(PullRequestPage {
            items: self.pull_requests.clone(),
            page_info: PageInfo::builder(params.page, params.per_page).build(),
        })
    }

    async fn list_reviews(
        &self,
        _locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Vec<Review>, IntakeError> {
        self.check()?;
        Ok(self
            .reviews
            .iter()
            .filter(|review| review.pull_request_number == number.get())
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TeamGateway for StubGateway {
    async fn list_teams(
        &self,
        _organisation: &OrganisationLocator,
    ) -> Result<Vec<Team>, IntakeError> {
        self.check()?;
        Ok(self.teams.clone())
    }

    async fn list_team_repositories(
        &self,
        _team_id: u64,
    ) -> Result<Vec<TeamRepository>, IntakeError> {
        self.check()?;
        Ok(self.team_repositories.clone())
    }
}
