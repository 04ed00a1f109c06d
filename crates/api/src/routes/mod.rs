pub mod cat;
pub mod health;
pub mod mission;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cats/create                POST          hire a cat
/// /cats/list                  GET           list cats
/// /cats/{id}                  GET, DELETE
/// /cats/{id}/salary           PUT
///
/// /missions                   GET, POST
/// /missions/{id}              GET, PUT, DELETE
/// /missions/{id}/assign       POST
/// /missions/{id}/targets      POST
/// /missions/targets/{id}      PUT, DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cats", cat::router())
        .nest("/missions", mission::router())
}
