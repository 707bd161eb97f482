//! Authenticated Octocrab client shared by the gateway implementations.

use http::Uri;
use octocrab::Octocrab;
use url::Url;

use crate::github::error::IntakeError;
use crate::github::locator::PersonalAccessToken;
use crate::github::rate_limit::RateLimitInfo;

use super::error_mapping::{FailureKind, classify, map_octocrab_error};

/// Builds an Octocrab client for the given token and API base URL.
///
/// The token is not checked against GitHub here; a rejected token surfaces
/// on the first request as [`IntakeError::Authentication`].
///
/// # Errors
///
/// Returns `IntakeError::InvalidUrl` when the base URI cannot be parsed or
/// `IntakeError::Api` when Octocrab fails to construct a client.
fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &Url,
) -> Result<Octocrab, IntakeError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| IntakeError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| IntakeError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}

/// Octocrab-backed gateway implementing both the pull request and team
/// gateways.
pub struct OctocrabGateway {
    pub(super) client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a bearer-authenticated gateway for the given API base.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidUrl` when the base URI cannot be parsed or
    /// `IntakeError::Api` when Octocrab fails to construct a client.
    pub fn for_token(token: &PersonalAccessToken, api_base: &Url) -> Result<Self, IntakeError> {
        build_octocrab_client(token, api_base).map(Self::new)
    }

    /// Maps an Octocrab error, enriching rate limit failures with the reset
    /// time reported by `GET /rate_limit`.
    pub(super) async fn map_error(&self, operation: &str, error: &octocrab::Error) -> IntakeError {
        let octocrab::Error::GitHub { source, .. } = error else {
            return map_octocrab_error(operation, error);
        };
        if classify(error) != FailureKind::RateLimited {
            return map_octocrab_error(operation, error);
        }

        let rate_limit = self.fetch_rate_limit_info().await;
        let message = match &rate_limit {
            Some(info) => format!(
                "{operation} failed: {} (resets at {})",
                source.message,
                info.reset_at()
            ),
            None => format!("{operation} failed: {}", source.message),
        };

        IntakeError::RateLimitExceeded {
            rate_limit,
            message,
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        RateLimitInfo::from_counters(rate.limit, rate.remaining, rate.reset)
    }
}
