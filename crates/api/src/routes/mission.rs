//! Route definitions for the `/missions` resource, including the
//! target routes nested under it.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{mission, target};
use crate::state::AppState;

/// Routes mounted at `/missions`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update_completion
/// DELETE /{id}            -> delete
/// POST   /{id}/assign     -> assign_cat
/// POST   /{id}/targets    -> add_target
/// PUT    /targets/{id}    -> target update
/// DELETE /targets/{id}    -> target delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mission::list).post(mission::create))
        .route(
            "/{id}",
            get(mission::get_by_id)
                .put(mission::update_completion)
                .delete(mission::delete),
        )
        .route("/{id}/assign", post(mission::assign_cat))
        .route("/{id}/targets", post(mission::add_target))
        .route("/targets/{id}", put(target::update).delete(target::delete))
}
