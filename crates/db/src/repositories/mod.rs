//! Repository layer.
//!
//! Each entity exposes a data-access trait so the lifecycle services can be
//! tested against in-memory fakes, plus a PostgreSQL implementation holding
//! the shared pool. Single-row lookups return `Ok(None)` for a missing row,
//! keeping "not found" distinct from storage faults.

pub mod cat_repo;
pub mod mission_repo;
pub mod target_repo;

pub use cat_repo::{CatRepository, PgCatRepo};
pub use mission_repo::{MissionRepository, PgMissionRepo};
pub use target_repo::{PgTargetRepo, TargetRepository};
