//! Row model for the pull request CSV export.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::github::{PullRequestRecord, Review};

/// Column names written as the first CSV record.
pub const HEADER: [&str; 14] = [
    "ID",
    "Number",
    "CreatedAt",
    "ClosedAt",
    "MergedAt",
    "Author",
    "ChangedFiles",
    "NumberReviewers",
    "baseBranch",
    "headBranch",
    "firstReview",
    "approveReview",
    "firstApprover",
    "totalReviews",
];

/// One approving review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approval {
    /// Submission time of the approving review.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Login of the approving reviewer.
    pub approver: Option<String>,
}

/// Review columns derived from a pull request's review list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewSummary {
    /// Nobody reviewed the pull request.
    Unreviewed,
    /// At least one review exists.
    Reviewed {
        /// Submission time of the first listed review.
        first_submitted_at: Option<DateTime<Utc>>,
        /// Approving reviews in list order. The first fills the approval
        /// columns.
        approvals: Vec<Approval>,
        /// Number of reviews returned.
        total: usize,
    },
}

impl ReviewSummary {
    /// Summarises reviews in the order GitHub returned them.
    #[must_use]
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let Some(first) = reviews.first() else {
            return Self::Unreviewed;
        };

        let approvals = reviews
            .iter()
            .filter(|review| review.is_approval())
            .map(|review| Approval {
                submitted_at: review.submitted_at,
                approver: review.reviewer.clone(),
            })
            .collect();

        Self::Reviewed {
            first_submitted_at: first.submitted_at,
            approvals,
            total: reviews.len(),
        }
    }

    /// True when reviews exist but none of them approves.
    #[must_use]
    pub const fn lacks_approval(&self) -> bool {
        matches!(self, Self::Reviewed { approvals, .. } if approvals.is_empty())
    }

    /// Approvals after the first, which have no column of their own.
    #[must_use]
    pub fn additional_approvals(&self) -> &[Approval] {
        match self {
            Self::Unreviewed => &[],
            Self::Reviewed { approvals, .. } => approvals.get(1..).unwrap_or_default(),
        }
    }
}

/// One CSV record, serialised in [`HEADER`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestRow {
    id: u64,
    number: u64,
    created_at: String,
    closed_at: String,
    merged_at: String,
    author: String,
    changed_files: u64,
    number_reviewers: usize,
    base_branch: String,
    head_branch: String,
    first_review: String,
    approve_review: String,
    first_approver: String,
    total_reviews: usize,
}

impl PullRequestRow {
    /// Projects a pull request and its review summary into a row.
    #[must_use]
    pub fn new(record: &PullRequestRecord, summary: &ReviewSummary) -> Self {
        let (first_review, approve_review, first_approver, total_reviews) = match summary {
            ReviewSummary::Unreviewed => (String::new(), String::new(), String::new(), 0),
            ReviewSummary::Reviewed {
                first_submitted_at,
                approvals,
                total,
            } => {
                let (approved_at, approver) = approvals.first().map_or_else(
                    || (String::new(), String::new()),
                    |found| {
                        (
                            format_timestamp(found.submitted_at),
                            found.approver.clone().unwrap_or_default(),
                        )
                    },
                );
                (
                    format_timestamp(*first_submitted_at),
                    approved_at,
                    approver,
                    *total,
                )
            }
        };

        Self {
            id: record.id,
            number: record.number,
            created_at: record.created_at.to_string(),
            closed_at: format_timestamp(record.closed_at),
            merged_at: format_timestamp(record.merged_at),
            author: record.author.clone().unwrap_or_default(),
            changed_files: record.changed_files.unwrap_or_default(),
            number_reviewers: record.requested_reviewers,
            base_branch: record.base_branch.clone(),
            head_branch: record.head_branch.clone(),
            first_review,
            approve_review,
            first_approver,
            total_reviews,
        }
    }

    /// Pull request number this row describes.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// Field values in column order, as they appear in the CSV.
    #[must_use]
    pub fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.number.to_string(),
            self.created_at.clone(),
            self.closed_at.clone(),
            self.merged_at.clone(),
            self.author.clone(),
            self.changed_files.to_string(),
            self.number_reviewers.to_string(),
            self.base_branch.clone(),
            self.head_branch.clone(),
            self.first_review.clone(),
            self.approve_review.clone(),
            self.first_approver.clone(),
            self.total_reviews.to_string(),
        ]
    }
}

fn format_timestamp(value: Option<DateTime<Utc>>) -> String {
    value.map(|instant| instant.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{HEADER, PullRequestRow, ReviewSummary};
    use crate::github::models::test_support::{approval, comment, pull_request_created};

    fn trailing_fields(row: &PullRequestRow) -> Vec<String> {
        row.fields().split_off(10)
    }

    #[rstest]
    fn unreviewed_pull_request_has_empty_review_columns_and_zero_count() {
        let record = pull_request_created(3, "2019-07-01T00:00:00Z");
        let row = PullRequestRow::new(&record, &ReviewSummary::from_reviews(&[]));

        assert_eq!(trailing_fields(&row), vec!["", "", "", "0"]);
    }

    #[rstest]
    fn first_review_and_first_approval_fill_review_columns() {
        let record = pull_request_created(3, "2019-07-01T00:00:00Z");
        let reviews = [
            comment(3, "bob", "2019-07-02T08:00:00Z"),
            approval(3, "alice", "2019-07-03T09:15:00Z"),
            approval(3, "carol", "2019-07-04T10:00:00Z"),
        ];

        let row = PullRequestRow::new(&record, &ReviewSummary::from_reviews(&reviews));

        assert_eq!(
            trailing_fields(&row),
            vec![
                "2019-07-02 08:00:00 UTC",
                "2019-07-03 09:15:00 UTC",
                "alice",
                "3"
            ]
        );
    }

    #[rstest]
    fn later_approvals_are_kept_beyond_the_fixed_columns() {
        let reviews = [
            approval(3, "alice", "2019-07-03T09:15:00Z"),
            comment(3, "bob", "2019-07-03T10:00:00Z"),
            approval(3, "carol", "2019-07-04T10:00:00Z"),
            approval(3, "dave", "2019-07-05T11:30:00Z"),
        ];

        let summary = ReviewSummary::from_reviews(&reviews);
        let approvers: Vec<Option<&str>> = summary
            .additional_approvals()
            .iter()
            .map(|extra| extra.approver.as_deref())
            .collect();

        assert_eq!(approvers, vec![Some("carol"), Some("dave")]);
        assert!(!summary.lacks_approval());
    }

    #[rstest]
    fn single_approval_has_no_additional_approvals() {
        let reviews = [approval(3, "alice", "2019-07-03T09:15:00Z")];

        assert!(
            ReviewSummary::from_reviews(&reviews)
                .additional_approvals()
                .is_empty()
        );
        assert!(ReviewSummary::Unreviewed.additional_approvals().is_empty());
    }

    #[rstest]
    fn reviews_without_approval_keep_fixed_width_row() {
        let record = pull_request_created(4, "2019-07-01T00:00:00Z");
        let reviews = [comment(4, "bob", "2019-07-02T08:00:00Z")];
        let summary = ReviewSummary::from_reviews(&reviews);

        let row = PullRequestRow::new(&record, &summary);

        assert!(summary.lacks_approval());
        assert_eq!(row.fields().len(), HEADER.len());
        assert_eq!(
            trailing_fields(&row),
            vec!["2019-07-02 08:00:00 UTC", "", "", "1"]
        );
    }

    #[rstest]
    fn record_fields_use_display_timestamps_and_defaults() {
        let mut record = pull_request_created(5, "2019-06-03T10:00:00Z");
        record.author = None;
        record.requested_reviewers = 2;

        let fields = PullRequestRow::new(&record, &ReviewSummary::Unreviewed).fields();

        assert_eq!(
            fields.get(..10).map(<[String]>::to_vec),
            Some(
                [
                    "1005",
                    "5",
                    "2019-06-03 10:00:00 UTC",
                    "",
                    "",
                    "",
                    "0",
                    "2",
                    "main",
                    "feature-5"
                ]
                .map(str::to_owned)
                .to_vec()
            )
        );
    }
}
