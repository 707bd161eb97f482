//! Repository pull request export operation.

use std::fs;
use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Local, NaiveDate};
use prharvest::export::{CsvRowSink, export_file_name};
use prharvest::telemetry::{StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
use prharvest::{
    CutoffDate, ExportReport, IntakeError, OctocrabGateway, PersonalAccessToken,
    PrharvestConfig, PullRequestGateway, PullRequestIntake, RepositoryLocator, parse_api_base,
};
use url::Url;

use super::output::{io_error, write_export_summary};

/// Exports a repository's pull requests to CSV.
///
/// # Errors
///
/// Returns [`IntakeError::Configuration`] if owner or repo is missing,
/// [`IntakeError::Io`] if the output file cannot be written, or the mapped
/// GitHub error if an API request fails.
pub async fn run(config: &PrharvestConfig) -> Result<(), IntakeError> {
    let mut stdout = io::stdout().lock();
    let context = ExportContext {
        today: Local::now().date_naive(),
        telemetry: &StderrJsonlTelemetrySink,
    };
    run_with_gateway_builder(config, OctocrabGateway::for_token, &context, &mut stdout).await
}

/// Exports pull requests using a custom gateway builder.
///
/// This function is exposed for testing with stub gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &PrharvestConfig,
    build_gateway: F,
    context: &ExportContext<'_>,
    writer: &mut W,
) -> Result<(), IntakeError>
where
    G: PullRequestGateway,
    F: FnOnce(&PersonalAccessToken, &Url) -> Result<G, IntakeError>,
    W: Write,
{
    let (owner, repo) = config.require_repository_info()?;
    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let cutoff = config.cutoff_date()?;
    let api_base = parse_api_base(&config.api_url)?;

    let locator = RepositoryLocator::new(api_base.as_str(), owner, repo)?;
    let gateway = build_gateway(&token, &api_base)?;

    let (path, report) =
        export_repository(&gateway, &locator, cutoff, config.output_dir(), context).await?;
    write_export_summary(writer, &format!("{owner}/{repo}"), &path, &report)
}

/// Inputs shared by every export in one invocation.
pub struct ExportContext<'a> {
    /// Date used for the second half of the file name.
    pub today: NaiveDate,
    /// Receives one [`TelemetryEvent::ExportCompleted`] per repository.
    pub telemetry: &'a dyn TelemetrySink,
}

/// Writes one repository's export into `output_dir` and records telemetry.
///
/// Returns the path of the CSV file alongside the export report.
pub(crate) async fn export_repository<G: PullRequestGateway>(
    gateway: &G,
    locator: &RepositoryLocator,
    cutoff: CutoffDate,
    output_dir: &Utf8Path,
    context: &ExportContext<'_>,
) -> Result<(Utf8PathBuf, ExportReport), IntakeError> {
    fs::create_dir_all(output_dir).map_err(|e| io_error(&e))?;
    let path = output_dir.join(export_file_name(
        locator.repository(),
        cutoff,
        context.today,
    ));

    tracing::info!(%path, cutoff = %cutoff, "exporting pull requests");
    let mut sink = CsvRowSink::create(&path)?;
    let report = PullRequestIntake::new(gateway)
        .export(locator, cutoff, &mut sink)
        .await?;
    sink.into_inner()?;

    let repository = format!(
        "{}/{}",
        locator.owner().as_str(),
        locator.repository().as_str()
    );
    context
        .telemetry
        .record(TelemetryEvent::export_completed(repository, &report));

    Ok((path, report))
}
