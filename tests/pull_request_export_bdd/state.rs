//! Scenario state and export driver for the pull request export BDD tests.

use std::fs;

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use prharvest::export::{CsvRowSink, export_file_name};
use prharvest::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};
use prharvest::{
    CutoffDate, ExportReport, IntakeError, OctocrabGateway, PersonalAccessToken,
    PullRequestIntake, RepositoryLocator, parse_api_base,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::Value;
use tempfile::TempDir;
use wiremock::MockServer;

use super::harness::mount_github_api;
use super::runtime::{SharedRuntime, ensure_runtime_and_server, server_uri};

#[derive(ScenarioState, Default)]
pub(crate) struct ExportState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) token: Slot<String>,
    pub(crate) pages: Slot<u32>,
    pub(crate) stale_page: Slot<u32>,
    pub(crate) reviews: Slot<Value>,
    pub(crate) reject_token: Slot<bool>,
    pub(crate) report: Slot<ExportReport>,
    pub(crate) csv: Slot<String>,
    pub(crate) error: Slot<IntakeError>,
}

/// Exports `owner/repo` from the mock server into a temporary directory and
/// keeps the CSV contents in the scenario state.
pub(crate) fn run_export(state: &ExportState, owner: &str, repo: &str) -> Result<(), IntakeError> {
    let runtime = ensure_runtime_and_server(&state.runtime, &state.server);
    mount_github_api(state, owner, repo);

    let uri = server_uri(&state.server);
    let output_dir = TempDir::new().map_err(|error| IntakeError::Io {
        message: error.to_string(),
    })?;
    let output_path = Utf8PathBuf::from_path_buf(output_dir.path().to_path_buf())
        .map_err(|_| IntakeError::Io {
            message: "temporary directory is not UTF-8".to_owned(),
        })?;

    let token = PersonalAccessToken::new(state.token.get().ok_or(IntakeError::MissingToken)?)?;
    let api_base = parse_api_base(&uri)?;
    let locator = RepositoryLocator::new(api_base.as_str(), owner, repo)?;
    let cutoff = CutoffDate::default();
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).ok_or_else(|| IntakeError::Io {
        message: "invalid fixture date".to_owned(),
    })?;
    let path = output_path.join(export_file_name(locator.repository(), cutoff, today));

    let report = runtime.block_on(async {
        let gateway = OctocrabGateway::for_token(&token, &api_base)?;
        let mut sink = CsvRowSink::create(&path)?;
        let report = PullRequestIntake::new(&gateway)
            .export(&locator, cutoff, &mut sink)
            .await?;
        sink.into_inner()?;
        Ok::<_, IntakeError>(report)
    })?;

    NoopTelemetrySink.record(TelemetryEvent::export_completed(
        format!("{owner}/{repo}"),
        &report,
    ));

    let csv = fs::read_to_string(&path).map_err(|error| IntakeError::Io {
        message: error.to_string(),
    })?;
    state.csv.set(csv);
    state.report.set(report);
    Ok(())
}
