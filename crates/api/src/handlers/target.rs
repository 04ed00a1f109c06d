//! Handlers for the `/missions/targets` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use spycat_core::types::DbId;
use spycat_db::models::target::{Target, UpdateTarget};

use crate::error::AppResult;
use crate::state::AppState;

/// PUT /api/missions/targets/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTarget>,
) -> AppResult<Json<Target>> {
    Ok(Json(state.missions.update_target(id, &input).await?))
}

/// DELETE /api/missions/targets/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.missions.delete_target(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
