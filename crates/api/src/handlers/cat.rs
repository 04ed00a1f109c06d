//! Handlers for the `/cats` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use spycat_core::types::DbId;
use spycat_db::models::cat::{Cat, CreateCat, UpdateCatSalary};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/cats/create
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCat>,
) -> AppResult<(StatusCode, Json<Cat>)> {
    input.validate()?;
    let cat = state.cats.create(&input).await?;
    Ok((StatusCode::CREATED, Json(cat)))
}

/// GET /api/cats/list
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Cat>>> {
    Ok(Json(state.cats.list().await?))
}

/// GET /api/cats/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Cat>> {
    Ok(Json(state.cats.get_by_id(id).await?))
}

/// PUT /api/cats/{id}/salary
pub async fn update_salary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCatSalary>,
) -> AppResult<Json<Cat>> {
    input.validate()?;
    Ok(Json(state.cats.update_salary(id, input.salary).await?))
}

/// DELETE /api/cats/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.cats.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
