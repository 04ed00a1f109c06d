//! Handlers for the `/missions` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use spycat_core::types::DbId;
use spycat_db::models::mission::{AssignCat, CreateMission, Mission, UpdateMission};
use spycat_db::models::target::{CreateTarget, Target};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/missions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMission>,
) -> AppResult<(StatusCode, Json<Mission>)> {
    input.validate()?;
    let mission = state.missions.create(&input).await?;
    Ok((StatusCode::CREATED, Json(mission)))
}

/// GET /api/missions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Mission>>> {
    Ok(Json(state.missions.list().await?))
}

/// GET /api/missions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Mission>> {
    Ok(Json(state.missions.get_by_id(id).await?))
}

/// PUT /api/missions/{id}
pub async fn update_completion(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMission>,
) -> AppResult<Json<Mission>> {
    Ok(Json(
        state.missions.update_completion(id, input.completed).await?,
    ))
}

/// DELETE /api/missions/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.missions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/missions/{id}/assign
pub async fn assign_cat(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AssignCat>,
) -> AppResult<StatusCode> {
    state.missions.assign_cat(id, input.cat_id).await?;
    Ok(StatusCode::OK)
}

/// POST /api/missions/{id}/targets
pub async fn add_target(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateTarget>,
) -> AppResult<(StatusCode, Json<Target>)> {
    input.validate()?;
    let target = state.missions.add_target(id, &input).await?;
    Ok((StatusCode::CREATED, Json(target)))
}
