//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`pull_request_export`]: Export one repository's pull requests to CSV
//! - [`team_repositories`]: List or export the repositories owned by a team
//!
//! Output formatting utilities are in [`output`].

pub mod output;
pub mod pull_request_export;
pub mod team_repositories;

#[cfg(test)]
pub mod test_utils;
