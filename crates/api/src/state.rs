use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::{CatService, MissionService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used by the health check).
    pub pool: spycat_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Cat lifecycle service.
    pub cats: Arc<CatService>,
    /// Mission and target lifecycle service.
    pub missions: Arc<MissionService>,
}
