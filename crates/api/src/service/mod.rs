//! Lifecycle services enforcing the agency's business invariants.
//!
//! Handlers stay thin; every branching rule lives here. Services receive
//! their repositories and the breed validator by constructor injection so
//! tests can substitute in-memory implementations.

mod cat;
mod mission;

pub use cat::CatService;
pub use mission::{MissionService, MAX_TARGETS_PER_MISSION};
