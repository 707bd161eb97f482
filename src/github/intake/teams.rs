//! Resolution of a team name to the repositories the team owns.

use crate::github::error::IntakeError;
use crate::github::gateway::TeamGateway;
use crate::github::locator::{OrganisationLocator, TeamName};
use crate::github::models::{Team, TeamRepository};

/// Looks up team repositories by team name.
pub struct TeamIntake<'client, Gateway>
where
    Gateway: TeamGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> TeamIntake<'client, Gateway>
where
    Gateway: TeamGateway,
{
    /// Create a new intake using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Finds the team whose name equals `team` exactly (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::TeamNotFound`] when no team matches, or any
    /// gateway failure.
    pub async fn find_team(
        &self,
        organisation: &OrganisationLocator,
        team: &TeamName,
    ) -> Result<Team, IntakeError> {
        let teams = self.client.list_teams(organisation).await?;
        for candidate in &teams {
            tracing::debug!(team = %candidate.name, "organisation team");
        }

        teams
            .into_iter()
            .find(|candidate| candidate.name == team.as_str())
            .ok_or_else(|| IntakeError::TeamNotFound {
                team: team.as_str().to_owned(),
            })
    }

    /// Lists the repositories of the named team.
    ///
    /// No repository request is made when the team cannot be found.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::TeamNotFound`] when no team matches, or any
    /// gateway failure.
    pub async fn repositories(
        &self,
        organisation: &OrganisationLocator,
        team: &TeamName,
    ) -> Result<Vec<TeamRepository>, IntakeError> {
        let matched = self.find_team(organisation, team).await?;
        self.client.list_team_repositories(matched.id).await
    }
}
