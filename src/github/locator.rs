//! Identity wrappers and REST path builders for organisations and
//! repositories.

use url::Url;

use super::error::IntakeError;

/// Public GitHub API endpoint used when no override is configured.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repository owner (user or organisation) wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Validates that the owner is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingPathSegments`] for a blank value.
    pub fn new(value: &str) -> Result<Self, IntakeError> {
        non_empty(value).map(Self)
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Validates that the repository name is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingPathSegments`] for a blank value.
    pub fn new(value: &str) -> Result<Self, IntakeError> {
        non_empty(value).map(Self)
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Team display name, matched case-sensitively against the organisation's
/// teams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamName(String);

impl TeamName {
    /// Validates that the team name is non-empty.
    ///
    /// Surrounding whitespace is kept because matching is exact.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingPathSegments`] for a blank value.
    pub fn new(value: &str) -> Result<Self, IntakeError> {
        if value.trim().is_empty() {
            return Err(IntakeError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the team name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    /// Wraps a pull request number.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidPullRequestNumber`] for zero.
    pub const fn new(value: u64) -> Result<Self, IntakeError> {
        if value == 0 {
            return Err(IntakeError::InvalidPullRequestNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, IntakeError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IntakeError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

fn non_empty(value: &str) -> Result<String, IntakeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IntakeError::MissingPathSegments);
    }
    Ok(trimmed.to_owned())
}

/// Parses an API base URL such as `https://api.github.com` or
/// `https://ghe.example.com/api/v3`.
///
/// # Errors
///
/// Returns [`IntakeError::InvalidUrl`] when the value is not an absolute
/// HTTP(S) URL.
pub fn parse_api_base(input: &str) -> Result<Url, IntakeError> {
    let parsed =
        Url::parse(input.trim()).map_err(|error| IntakeError::InvalidUrl(error.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(IntakeError::InvalidUrl(format!(
            "unsupported scheme `{other}`"
        ))),
    }
}

/// Organisation on a GitHub host, used for team lookups.
///
/// # Example
///
/// ```
/// use prharvest::github::OrganisationLocator;
///
/// let locator = OrganisationLocator::new("https://api.github.com", "octo-org")
///     .expect("should build organisation locator");
/// assert_eq!(locator.owner().as_str(), "octo-org");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganisationLocator {
    api_base: Url,
    owner: RepositoryOwner,
}

impl OrganisationLocator {
    /// Creates an organisation locator for the given API base.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidUrl`] for a malformed API base or
    /// [`IntakeError::MissingPathSegments`] for a blank organisation.
    pub fn new(api_base: &str, owner: &str) -> Result<Self, IntakeError> {
        Ok(Self {
            api_base: parse_api_base(api_base)?,
            owner: RepositoryOwner::new(owner)?,
        })
    }

    /// API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Organisation login.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Locator for one repository owned by this organisation.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingPathSegments`] for a blank name.
    pub fn repository(&self, name: &str) -> Result<RepositoryLocator, IntakeError> {
        Ok(RepositoryLocator {
            api_base: self.api_base.clone(),
            owner: self.owner.clone(),
            repository: RepositoryName::new(name)?,
        })
    }

    pub(crate) fn teams_path(&self) -> String {
        format!("/orgs/{}/teams", self.owner.as_str())
    }
}

/// Repository on a GitHub host, used for pull request and review listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a repository locator for the given API base.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidUrl`] for a malformed API base or
    /// [`IntakeError::MissingPathSegments`] when owner or repo is blank.
    pub fn new(api_base: &str, owner: &str, repo: &str) -> Result<Self, IntakeError> {
        OrganisationLocator::new(api_base, owner)?.repository(repo)
    }

    /// Creates a repository locator on the public `github.com` API.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::MissingPathSegments` when owner or repo is empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, IntakeError> {
        Self::new(DEFAULT_API_BASE, owner, repo)
    }

    /// API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    pub(crate) fn pulls_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    pub(crate) fn reviews_path(&self, number: PullRequestNumber) -> String {
        format!("{}/{}/reviews", self.pulls_path(), number.get())
    }
}

/// Path listing the repositories a team can access, addressed by team id.
pub(crate) fn team_repositories_path(team_id: u64) -> String {
    format!("/teams/{team_id}/repos")
}
