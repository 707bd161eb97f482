//! Tests for operation mode determination.

use rstest::rstest;

use crate::PrharvestConfig;
use crate::config::OperationMode;

fn config(repo: Option<&str>, team: Option<&str>, export_team: bool) -> PrharvestConfig {
    PrharvestConfig {
        owner: Some("octocat".to_owned()),
        repo: repo.map(str::to_owned),
        team: team.map(str::to_owned),
        export_team,
        ..Default::default()
    }
}

#[rstest]
#[case::repository(Some("widgets"), None, false, OperationMode::PullRequestExport)]
#[case::repository_beats_team(
    Some("widgets"),
    Some("platform"),
    true,
    OperationMode::PullRequestExport
)]
#[case::team_listing(None, Some("platform"), false, OperationMode::TeamRepositories)]
#[case::team_export(None, Some("platform"), true, OperationMode::TeamExport)]
#[case::nothing_selected(None, None, false, OperationMode::PullRequestExport)]
fn selects_mode_from_repository_and_team(
    #[case] repo: Option<&str>,
    #[case] team: Option<&str>,
    #[case] export_team: bool,
    #[case] expected: OperationMode,
) {
    assert_eq!(config(repo, team, export_team).operation_mode(), expected);
}
