//! Data models for pull requests, reviews, and team repositories.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into the public domain types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[cfg(feature = "test-support")]
pub mod test_support;

/// Pull request fields projected into an export row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    /// Global pull request identifier.
    pub id: u64,
    /// Repository-scoped pull request number.
    pub number: u64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Close timestamp, when closed.
    pub closed_at: Option<DateTime<Utc>>,
    /// Merge timestamp, when merged.
    pub merged_at: Option<DateTime<Utc>>,
    /// Author login if present.
    pub author: Option<String>,
    /// Changed file count. GitHub only reports it on single pull request
    /// responses, so list results usually leave it empty.
    pub changed_files: Option<u64>,
    /// Number of reviewers currently requested.
    pub requested_reviewers: usize,
    /// Target branch name.
    pub base_branch: String,
    /// Source branch name.
    pub head_branch: String,
}

/// State of a submitted review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewState {
    /// The reviewer approved the change.
    Approved,
    /// The reviewer requested changes.
    ChangesRequested,
    /// The reviewer left comments without a verdict.
    Commented,
    /// A previous review was dismissed.
    Dismissed,
    /// The review has not been submitted yet.
    Pending,
    /// A state this client does not know about.
    Other(String),
}

impl From<&str> for ReviewState {
    fn from(value: &str) -> Self {
        match value {
            "APPROVED" => Self::Approved,
            "CHANGES_REQUESTED" => Self::ChangesRequested,
            "COMMENTED" => Self::Commented,
            "DISMISSED" => Self::Dismissed,
            "PENDING" => Self::Pending,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Review submitted on a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Submission timestamp; absent for pending reviews.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Review verdict.
    pub state: ReviewState,
    /// Reviewer login if present.
    pub reviewer: Option<String>,
    /// Number of the reviewed pull request.
    pub pull_request_number: u64,
}

impl Review {
    /// Returns true for approving reviews.
    #[must_use]
    pub fn is_approval(&self) -> bool {
        self.state == ReviewState::Approved
    }
}

/// Team within an organisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Team identifier used by the team repository endpoint.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// URL-friendly name.
    pub slug: Option<String>,
}

/// Repository a team can access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRepository {
    /// Repository identifier.
    pub id: u64,
    /// Short repository name.
    pub name: String,
    /// `owner/name` form.
    pub full_name: Option<String>,
    /// Browser URL.
    pub html_url: Option<String>,
    /// Whether the repository is private.
    pub private: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiBranch {
    #[serde(rename = "ref")]
    pub(crate) name: Option<String>,
}

/// API response type for pull request listings.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequest {
    pub(crate) id: u64,
    pub(crate) number: u64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) closed_at: Option<DateTime<Utc>>,
    pub(crate) merged_at: Option<DateTime<Utc>>,
    pub(crate) user: Option<ApiUser>,
    pub(crate) changed_files: Option<u64>,
    #[serde(default)]
    pub(crate) requested_reviewers: Vec<ApiUser>,
    pub(crate) base: Option<ApiBranch>,
    pub(crate) head: Option<ApiBranch>,
}

/// API response type for pull request reviews.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiReview {
    pub(crate) submitted_at: Option<DateTime<Utc>>,
    pub(crate) state: Option<String>,
    pub(crate) user: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiTeam {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) slug: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) full_name: Option<String>,
    pub(crate) html_url: Option<String>,
    #[serde(default)]
    pub(crate) private: bool,
}

fn branch_name(branch: Option<ApiBranch>) -> String {
    branch.and_then(|value| value.name).unwrap_or_default()
}

impl From<ApiPullRequest> for PullRequestRecord {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            id: value.id,
            number: value.number,
            created_at: value.created_at,
            closed_at: value.closed_at,
            merged_at: value.merged_at,
            author: value.user.and_then(|user| user.login),
            changed_files: value.changed_files,
            requested_reviewers: value.requested_reviewers.len(),
            base_branch: branch_name(value.base),
            head_branch: branch_name(value.head),
        }
    }
}

impl ApiReview {
    pub(crate) fn into_review(self, pull_request_number: u64) -> Review {
        Review {
            submitted_at: self.submitted_at,
            state: self
                .state
                .as_deref()
                .map_or(ReviewState::Pending, ReviewState::from),
            reviewer: self.user.and_then(|user| user.login),
            pull_request_number,
        }
    }
}

impl From<ApiTeam> for Team {
    fn from(value: ApiTeam) -> Self {
        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
        }
    }
}

impl From<ApiRepository> for TeamRepository {
    fn from(value: ApiRepository) -> Self {
        Self {
            id: value.id,
            name: value.name,
            full_name: value.full_name,
            html_url: value.html_url,
            private: value.private,
        }
    }
}
