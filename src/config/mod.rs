//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.prharvest.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PRHARVEST_TOKEN`, `PRHARVEST_OWNER`, and
//!    friends, or legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--token`/`-t`, `--owner`/`-o`,
//!    `--repo`/`-r`, `--team`/`-m`, and so on
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! owner = "octocat"
//! repo = "hello-world"
//! cutoff = "2019-06-01"
//! output_dir = "exports"
//! ```

use std::env;

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::IntakeError;
use crate::github::{CutoffDate, DEFAULT_API_BASE};

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Export one repository's pull requests to CSV.
    PullRequestExport,
    /// Print the repositories owned by a team.
    TeamRepositories,
    /// Export every repository owned by a team.
    TeamExport,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `PRHARVEST_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `PRHARVEST_OWNER` or `--owner`: Repository owner or organisation
/// - `PRHARVEST_REPO` or `--repo`: Repository name
/// - `PRHARVEST_TEAM` or `--team`: Team name
/// - `PRHARVEST_CUTOFF` or `--cutoff`: Cutoff date (`YYYY-MM-DD`)
/// - `PRHARVEST_OUTPUT_DIR` or `--output-dir`: Directory for CSV files
/// - `PRHARVEST_API_URL` or `--api-url`: GitHub API base URL
///
/// # Example
///
/// ```no_run
/// use prharvest::PrharvestConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = PrharvestConfig::load().expect("failed to load configuration");
/// let (owner, repo) = config.require_repository_info().expect("repository required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PRHARVEST",
    discovery(
        dotfile_name = ".prharvest.toml",
        config_file_name = "prharvest.toml",
        app_name = "prharvest"
    )
)]
pub struct PrharvestConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `PRHARVEST_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Repository owner or organisation (e.g., "octocat").
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name (e.g., "hello-world").
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Team name, matched exactly against the organisation's teams.
    #[ortho_config(cli_short = 'm')]
    pub team: Option<String>,

    /// Exports every repository of `team` instead of listing them.
    ///
    /// Can be provided via:
    /// - CLI: `--export-team`
    /// - Config file: `export_team = true`
    ///
    /// Note: `PRHARVEST_EXPORT_TEAM` is not read because `ortho_config`
    /// does not load boolean values from the environment.
    #[ortho_config()]
    pub export_team: bool,

    /// Pull requests created on or before this date are not exported.
    ///
    /// Uses the `YYYY-MM-DD` format and defaults to `2019-06-01`.
    #[ortho_config()]
    pub cutoff: String,

    /// Directory receiving the CSV files. Defaults to the working directory.
    #[ortho_config()]
    pub output_dir: String,

    /// GitHub REST API base URL. Defaults to `https://api.github.com`.
    #[ortho_config()]
    pub api_url: String,
}

const DEFAULT_CUTOFF: &str = "2019-06-01";
const DEFAULT_OUTPUT_DIR: &str = ".";

impl Default for PrharvestConfig {
    fn default() -> Self {
        Self {
            token: None,
            owner: None,
            repo: None,
            team: None,
            export_team: false,
            cutoff: DEFAULT_CUTOFF.to_owned(),
            output_dir: DEFAULT_OUTPUT_DIR.to_owned(),
            api_url: DEFAULT_API_BASE.to_owned(),
        }
    }
}

impl PrharvestConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, IntakeError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(IntakeError::MissingToken)
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// A configured repository always selects `PullRequestExport`. Otherwise
    /// a team selects `TeamExport` or `TeamRepositories` depending on
    /// `export_team`. With neither set the mode is `PullRequestExport`, so
    /// the missing repository is reported when the export starts.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.repo.is_some() || self.team.is_none() {
            OperationMode::PullRequestExport
        } else if self.export_team {
            OperationMode::TeamExport
        } else {
            OperationMode::TeamRepositories
        }
    }

    /// Returns owner and repo if both are configured.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] when owner or repo is missing.
    pub fn require_repository_info(&self) -> Result<(&str, &str), IntakeError> {
        match (&self.owner, &self.repo) {
            (Some(owner), Some(repo)) => Ok((owner.as_str(), repo.as_str())),
            (None, _) => Err(missing_owner()),
            (_, None) => Err(IntakeError::Configuration {
                message: "repository name is required (use --repo or -r)".to_owned(),
            }),
        }
    }

    /// Returns owner and team if both are configured.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] when owner or team is missing.
    pub fn require_team_info(&self) -> Result<(&str, &str), IntakeError> {
        match (&self.owner, &self.team) {
            (Some(owner), Some(team)) => Ok((owner.as_str(), team.as_str())),
            (None, _) => Err(missing_owner()),
            (_, None) => Err(IntakeError::Configuration {
                message: "team name is required (use --team or -m)".to_owned(),
            }),
        }
    }

    /// Parses the configured cutoff date.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidCutoff`] when the value is not a
    /// `YYYY-MM-DD` date.
    pub fn cutoff_date(&self) -> Result<CutoffDate, IntakeError> {
        self.cutoff.trim().parse()
    }

    /// Directory the CSV files are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Utf8Path {
        Utf8Path::new(&self.output_dir)
    }
}

fn missing_owner() -> IntakeError {
    IntakeError::Configuration {
        message: "repository owner is required (use --owner or -o)".to_owned(),
    }
}

#[cfg(test)]
mod tests;
