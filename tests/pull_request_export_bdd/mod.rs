//! Support modules for the pull request export BDD tests.

pub(crate) mod harness;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use state::{ExportState, run_export};
