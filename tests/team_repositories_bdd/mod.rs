//! Support modules for the team repository BDD tests.

#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use state::{TeamState, lookup_repositories, seed_organisation};
