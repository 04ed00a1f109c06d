use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use spycat_breeds::BreedApiError;
use spycat_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses:
/// missing entities map to 404, input problems to 400, business-rule
/// conflicts to 409, catalog outages to 502.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `spycat_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The external breed catalog was unreachable or returned garbage.
    #[error("Breed catalog error: {0}")]
    BreedCatalog(#[from] BreedApiError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => {
                let (status, code) = match core {
                    CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                    CoreError::InvalidBreed(_) => (StatusCode::BAD_REQUEST, "INVALID_BREED"),
                    CoreError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
                    CoreError::MissionAssigned { .. } => (StatusCode::CONFLICT, "MISSION_ASSIGNED"),
                    CoreError::MissionCompleted { .. } => {
                        (StatusCode::CONFLICT, "MISSION_COMPLETED")
                    }
                    CoreError::TargetCompleted { .. } => (StatusCode::CONFLICT, "TARGET_COMPLETED"),
                    CoreError::TargetLocked { .. } => (StatusCode::CONFLICT, "TARGET_LOCKED"),
                    CoreError::TargetLimitExceeded { .. } => {
                        (StatusCode::CONFLICT, "TARGET_LIMIT_EXCEEDED")
                    }
                };
                (status, code, core.to_string())
            }

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Breed catalog errors ---
            AppError::BreedCatalog(err) => {
                tracing::error!(error = %err, "Breed catalog error");
                (
                    StatusCode::BAD_GATEWAY,
                    "BREED_CATALOG_UNAVAILABLE",
                    "Breed catalog is unavailable".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
