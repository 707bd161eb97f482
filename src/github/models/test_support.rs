//! Fixture builders for pull request and review models.
//!
//! # Examples
//!
//! ```
//! use prharvest::github::models::test_support::{approval, pull_request_created};
//!
//! let record = pull_request_created(7, "2019-07-01T00:00:00Z");
//! assert_eq!(record.number, 7);
//!
//! let review = approval(7, "alice", "2019-07-02T00:00:00Z");
//! assert!(review.is_approval());
//! ```

use chrono::{DateTime, Utc};

use super::{PullRequestRecord, Review, ReviewState};

/// Parses an RFC 3339 timestamp, panicking on malformed fixtures.
///
/// # Panics
///
/// Panics when `value` is not a valid RFC 3339 timestamp.
#[must_use]
pub fn timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .unwrap_or_else(|error| panic!("invalid fixture timestamp `{value}`: {error}"))
}

/// Open pull request with the given number and creation time.
///
/// The id is derived from the number so rows stay distinguishable.
///
/// # Panics
///
/// Panics when `created_at` is not a valid RFC 3339 timestamp.
#[must_use]
pub fn pull_request_created(number: u64, created_at: &str) -> PullRequestRecord {
    PullRequestRecord {
        id: number.saturating_add(1000),
        number,
        created_at: timestamp(created_at),
        closed_at: None,
        merged_at: None,
        author: Some("contributor".to_owned()),
        changed_files: None,
        requested_reviewers: 0,
        base_branch: "main".to_owned(),
        head_branch: format!("feature-{number}"),
    }
}

/// Submitted review with an explicit state.
///
/// # Panics
///
/// Panics when `submitted_at` is not a valid RFC 3339 timestamp.
#[must_use]
pub fn review(number: u64, state: ReviewState, reviewer: &str, submitted_at: &str) -> Review {
    Review {
        submitted_at: Some(timestamp(submitted_at)),
        state,
        reviewer: Some(reviewer.to_owned()),
        pull_request_number: number,
    }
}

/// Approving review.
///
/// # Panics
///
/// Panics when `submitted_at` is not a valid RFC 3339 timestamp.
#[must_use]
pub fn approval(number: u64, reviewer: &str, submitted_at: &str) -> Review {
    review(number, ReviewState::Approved, reviewer, submitted_at)
}

/// Comment-only review.
///
/// # Panics
///
/// Panics when `submitted_at` is not a valid RFC 3339 timestamp.
#[must_use]
pub fn comment(number: u64, reviewer: &str, submitted_at: &str) -> Review {
    review(number, ReviewState::Commented, reviewer, submitted_at)
}
