//! Translation of Octocrab failures into [`IntakeError`] variants.

use http::StatusCode;

use crate::github::error::IntakeError;

/// Broad failure class of an Octocrab error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FailureKind {
    /// 401, or 403 without rate limit wording.
    Authentication,
    /// 403/429 whose message or documentation link mentions the rate limit.
    RateLimited,
    /// Transport failure before GitHub answered.
    Network,
    /// Any other GitHub or client failure.
    Api,
}

fn mentions_rate_limit(source: &octocrab::GitHubError) -> bool {
    source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"))
}

/// Classifies a GitHub error response by status and wording.
pub(super) fn classify_response(source: &octocrab::GitHubError) -> FailureKind {
    match source.status_code {
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS if mentions_rate_limit(source) => {
            FailureKind::RateLimited
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FailureKind::Authentication,
        _ => FailureKind::Api,
    }
}

pub(super) fn classify(error: &octocrab::Error) -> FailureKind {
    match error {
        octocrab::Error::GitHub { source, .. } => classify_response(source),
        octocrab::Error::Http { .. }
        | octocrab::Error::Hyper { .. }
        | octocrab::Error::Service { .. } => FailureKind::Network,
        _ => FailureKind::Api,
    }
}

/// Maps an error without contacting GitHub again. Rate limit failures carry
/// no reset information here; see `OctocrabGateway::map_error`.
pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> IntakeError {
    let detail = match error {
        octocrab::Error::GitHub { source, .. } => {
            format!("GitHub returned {} {}", source.status_code, source.message)
        }
        other => other.to_string(),
    };
    let message = format!("{operation} failed: {detail}");

    match classify(error) {
        FailureKind::Authentication => IntakeError::Authentication { message },
        FailureKind::RateLimited => IntakeError::RateLimitExceeded {
            rate_limit: None,
            message,
        },
        FailureKind::Network => IntakeError::Network { message },
        FailureKind::Api => IntakeError::Api { message },
    }
}
