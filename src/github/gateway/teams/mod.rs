//! Team and team repository listing through Octocrab.

use async_trait::async_trait;

use crate::github::error::IntakeError;
use crate::github::locator::{OrganisationLocator, team_repositories_path};
use crate::github::models::{ApiRepository, ApiTeam, Team, TeamRepository};

use super::TeamGateway;
use super::client::OctocrabGateway;

const TEAMS_PER_PAGE: &str = "100";

#[async_trait]
impl TeamGateway for OctocrabGateway {
    async fn list_teams(
        &self,
        organisation: &OrganisationLocator,
    ) -> Result<Vec<Team>, IntakeError> {
        let query_params = [("per_page", TEAMS_PER_PAGE)];

        match self
            .client
            .get::<Vec<ApiTeam>, _, _>(organisation.teams_path(), Some(&query_params))
            .await
        {
            Ok(teams) => Ok(teams.into_iter().map(ApiTeam::into).collect()),
            Err(error) => Err(self.map_error("list teams", &error).await),
        }
    }

    async fn list_team_repositories(
        &self,
        team_id: u64,
    ) -> Result<Vec<TeamRepository>, IntakeError> {
        let query_params = [("per_page", TEAMS_PER_PAGE)];

        match self
            .client
            .get::<Vec<ApiRepository>, _, _>(team_repositories_path(team_id), Some(&query_params))
            .await
        {
            Ok(repositories) => Ok(repositories.into_iter().map(ApiRepository::into).collect()),
            Err(error) => Err(self.map_error("list team repositories", &error).await),
        }
    }
}
