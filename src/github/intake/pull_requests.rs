//! Pull request enumeration feeding the CSV export.

use crate::export::{PullRequestRow, ReviewSummary, RowSink};
use crate::github::cutoff::CutoffDate;
use crate::github::error::IntakeError;
use crate::github::gateway::{ListPullRequestsParams, PullRequestGateway};
use crate::github::locator::{PullRequestNumber, RepositoryLocator};
use crate::github::models::PullRequestRecord;

/// Whether enumeration may continue after a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Every entry on the page was newer than the cutoff.
    Continue,
    /// An entry at or before the cutoff was reached.
    ReachedCutoff,
}

/// Summary of one export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Pull requests processed, newest first.
    pub pull_requests: Vec<PullRequestRecord>,
    /// Pages requested from GitHub.
    pub pages_fetched: u32,
    /// Rows written to the sink.
    pub rows_written: usize,
    /// Rows the sink rejected.
    pub rows_skipped: usize,
    /// Approvals after a pull request's first, which no column records.
    pub additional_approvals: usize,
    /// True when the cutoff, rather than the last page, ended enumeration.
    pub reached_cutoff: bool,
}

/// Pages through a repository's pull requests, newest first, exporting one
/// row per pull request created after the cutoff.
pub struct PullRequestIntake<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> PullRequestIntake<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Create a new intake using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Exports pull requests created after `cutoff` into `sink`.
    ///
    /// The sink is flushed after every page. Enumeration stops at the first
    /// pull request not created after the cutoff, on an empty page, or after
    /// the last page.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures and sink flush failures. Rejected rows are
    /// logged and counted in [`ExportReport::rows_skipped`] instead.
    pub async fn export<S: RowSink>(
        &self,
        locator: &RepositoryLocator,
        cutoff: CutoffDate,
        sink: &mut S,
    ) -> Result<ExportReport, IntakeError> {
        let mut report = ExportReport::default();
        let mut params = ListPullRequestsParams::default();

        loop {
            let page = self.client.list_pull_requests(locator, &params).await?;
            report.pages_fetched = report.pages_fetched.saturating_add(1);

            let Some(newest) = page.items.first() else {
                tracing::info!(page = params.page, "empty page, stopping");
                break;
            };
            tracing::info!(
                page = params.page,
                newest = %newest.created_at.format("%B-%-d"),
                "fetched pull request page"
            );

            let outcome = self
                .export_page(locator, cutoff, page.items, sink, &mut report)
                .await?;
            sink.flush()?;

            if outcome == PageOutcome::ReachedCutoff {
                report.reached_cutoff = true;
                break;
            }

            match page.page_info.next_page() {
                Some(next) => params = params.with_page(next),
                None => break,
            }
        }

        Ok(report)
    }

    async fn export_page<S: RowSink>(
        &self,
        locator: &RepositoryLocator,
        cutoff: CutoffDate,
        items: Vec<PullRequestRecord>,
        sink: &mut S,
        report: &mut ExportReport,
    ) -> Result<PageOutcome, IntakeError> {
        for record in items {
            if !cutoff.admits(record.created_at) {
                return Ok(PageOutcome::ReachedCutoff);
            }

            let row = self.project(locator, &record, report).await?;
            match sink.write_row(&row) {
                Ok(()) => report.rows_written = report.rows_written.saturating_add(1),
                Err(error) => {
                    tracing::warn!(number = record.number, %error, "failed to write pull request");
                    report.rows_skipped = report.rows_skipped.saturating_add(1);
                }
            }
            report.pull_requests.push(record);
        }

        Ok(PageOutcome::Continue)
    }

    async fn project(
        &self,
        locator: &RepositoryLocator,
        record: &PullRequestRecord,
        report: &mut ExportReport,
    ) -> Result<PullRequestRow, IntakeError> {
        let number = PullRequestNumber::new(record.number)?;
        let reviews = self.client.list_reviews(locator, number).await?;
        let summary = ReviewSummary::from_reviews(&reviews);

        if summary.lacks_approval() {
            tracing::debug!(
                number = record.number,
                reviews = reviews.len(),
                "pull request reviewed without approval"
            );
        }

        let extra = summary.additional_approvals();
        if !extra.is_empty() {
            let approvers: Vec<&str> = extra
                .iter()
                .map(|approval| approval.approver.as_deref().unwrap_or_default())
                .collect();
            tracing::warn!(
                number = record.number,
                approvers = %approvers.join(","),
                "approvals after the first are not exported"
            );
            report.additional_approvals = report.additional_approvals.saturating_add(extra.len());
        }

        Ok(PullRequestRow::new(record, &summary))
    }
}
