//! Scenario state, mock organisation, and lookup driver for the team
//! repository BDD tests.

use prharvest::{
    IntakeError, OctocrabGateway, OrganisationLocator, PersonalAccessToken, TeamIntake, TeamName,
    TeamRepository, parse_api_base,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::runtime::{SharedRuntime, ensure_runtime_and_server, mount, server_uri};

const TEAM_ID: u64 = 42;

#[derive(ScenarioState, Default)]
pub(crate) struct TeamState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) token: Slot<String>,
    pub(crate) repositories: Slot<Vec<TeamRepository>>,
    pub(crate) error: Slot<IntakeError>,
}

fn repository_json(organisation: &str, name: &str, id: u64) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("{organisation}/{name}"),
        "html_url": format!("https://github.com/{organisation}/{name}"),
        "private": false
    })
}

/// Mounts an organisation with one team owning `repositories`, plus an
/// unrelated team owning nothing.
pub(crate) fn seed_organisation(
    state: &TeamState,
    organisation: &str,
    team: &str,
    repositories: &[&str],
) {
    let teams = Mock::given(method("GET"))
        .and(path(format!("/orgs/{organisation}/teams")))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 7, "name": "Infrastructure", "slug": "infrastructure" },
            { "id": TEAM_ID, "name": team, "slug": team.to_lowercase() }
        ])));
    mount(&state.runtime, &state.server, teams);

    let body: Vec<Value> = repositories
        .iter()
        .zip(1_u64..)
        .map(|(name, id)| repository_json(organisation, name, id))
        .collect();
    let team_repositories = Mock::given(method("GET"))
        .and(path(format!("/teams/{TEAM_ID}/repos")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body));
    mount(&state.runtime, &state.server, team_repositories);
}

/// Looks up the repositories of `team` against the mock server.
pub(crate) fn lookup_repositories(
    state: &TeamState,
    organisation: &str,
    team: &str,
) -> Result<Vec<TeamRepository>, IntakeError> {
    let runtime = ensure_runtime_and_server(&state.runtime, &state.server);
    let api_base = parse_api_base(&server_uri(&state.server))?;
    let token = PersonalAccessToken::new(state.token.get().ok_or(IntakeError::MissingToken)?)?;
    let locator = OrganisationLocator::new(api_base.as_str(), organisation)?;
    let team_name = TeamName::new(team)?;

    runtime.block_on(async {
        let gateway = OctocrabGateway::for_token(&token, &api_base)?;
        TeamIntake::new(&gateway)
            .repositories(&locator, &team_name)
            .await
    })
}
