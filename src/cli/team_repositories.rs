//! Team repository listing and team-wide export operations.

use std::io::{self, Write};

use chrono::Local;
use prharvest::telemetry::StderrJsonlTelemetrySink;
use prharvest::{
    IntakeError, OctocrabGateway, OrganisationLocator, PersonalAccessToken, PrharvestConfig,
    PullRequestGateway, RepositoryLocator, TeamGateway, TeamIntake, TeamName, TeamRepository,
    parse_api_base,
};
use url::Url;

use super::output::{write_export_summary, write_team_repositories};
use super::pull_request_export::{ExportContext, export_repository};

/// Prints the repositories owned by the configured team.
///
/// # Errors
///
/// Returns [`IntakeError::Configuration`] if owner or team is missing,
/// [`IntakeError::TeamNotFound`] if no team has that exact name, or the
/// mapped GitHub error if an API request fails.
pub async fn run_listing(config: &PrharvestConfig) -> Result<(), IntakeError> {
    let mut stdout = io::stdout().lock();
    list_with_gateway_builder(config, OctocrabGateway::for_token, &mut stdout).await
}

/// Exports every repository owned by the configured team.
///
/// # Errors
///
/// As [`run_listing`], plus any error from an individual export.
pub async fn run_export(config: &PrharvestConfig) -> Result<(), IntakeError> {
    let mut stdout = io::stdout().lock();
    let context = ExportContext {
        today: Local::now().date_naive(),
        telemetry: &StderrJsonlTelemetrySink,
    };
    export_with_gateway_builder(config, OctocrabGateway::for_token, &context, &mut stdout).await
}

/// Lists team repositories using a custom gateway builder.
pub async fn list_with_gateway_builder<G, F, W>(
    config: &PrharvestConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<(), IntakeError>
where
    G: TeamGateway,
    F: FnOnce(&PersonalAccessToken, &Url) -> Result<G, IntakeError>,
    W: Write,
{
    let (organisation, team, gateway) = prepare(config, build_gateway)?;
    let repositories = TeamIntake::new(&gateway)
        .repositories(&organisation, &team)
        .await?;

    write_team_repositories(
        writer,
        team.as_str(),
        organisation.owner().as_str(),
        &repositories,
    )
}

/// Exports every team repository using a custom gateway builder.
///
/// Repositories are exported one after another; the first failure stops
/// the run.
pub async fn export_with_gateway_builder<G, F, W>(
    config: &PrharvestConfig,
    build_gateway: F,
    context: &ExportContext<'_>,
    writer: &mut W,
) -> Result<(), IntakeError>
where
    G: TeamGateway + PullRequestGateway,
    F: FnOnce(&PersonalAccessToken, &Url) -> Result<G, IntakeError>,
    W: Write,
{
    let cutoff = config.cutoff_date()?;
    let (organisation, team, gateway) = prepare(config, build_gateway)?;
    let repositories = TeamIntake::new(&gateway)
        .repositories(&organisation, &team)
        .await?;
    tracing::info!(
        team = team.as_str(),
        count = repositories.len(),
        "exporting team repositories"
    );

    for repository in &repositories {
        let locator = repository_locator(&organisation, repository)?;
        let (path, report) =
            export_repository(&gateway, &locator, cutoff, config.output_dir(), context).await?;
        write_export_summary(writer, &display_name(repository), &path, &report)?;
    }

    Ok(())
}

fn prepare<G, F>(
    config: &PrharvestConfig,
    build_gateway: F,
) -> Result<(OrganisationLocator, TeamName, G), IntakeError>
where
    F: FnOnce(&PersonalAccessToken, &Url) -> Result<G, IntakeError>,
{
    let (owner, team_value) = config.require_team_info()?;
    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let api_base = parse_api_base(&config.api_url)?;

    let organisation = OrganisationLocator::new(api_base.as_str(), owner)?;
    let team = TeamName::new(team_value)?;
    let gateway = build_gateway(&token, &api_base)?;
    Ok((organisation, team, gateway))
}

/// Locates a team repository under the owner in its `full_name`, which may
/// differ from the team's organisation.
fn repository_locator(
    organisation: &OrganisationLocator,
    repository: &TeamRepository,
) -> Result<RepositoryLocator, IntakeError> {
    match repository
        .full_name
        .as_deref()
        .and_then(|full_name| full_name.split_once('/'))
    {
        Some((owner, _)) => RepositoryLocator::new(
            organisation.api_base().as_str(),
            owner,
            &repository.name,
        ),
        None => organisation.repository(&repository.name),
    }
}

fn display_name(repository: &TeamRepository) -> String {
    repository
        .full_name
        .clone()
        .unwrap_or_else(|| repository.name.clone())
}
