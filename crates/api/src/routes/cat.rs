//! Route definitions for the `/cats` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::cat;
use crate::state::AppState;

/// Routes mounted at `/cats`.
///
/// ```text
/// POST   /create          -> create
/// GET    /list            -> list
/// GET    /{id}            -> get_by_id
/// PUT    /{id}/salary     -> update_salary
/// DELETE /{id}            -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(cat::create))
        .route("/list", get(cat::list))
        .route("/{id}", get(cat::get_by_id).delete(cat::delete))
        .route("/{id}/salary", put(cat::update_salary))
}
