use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use duel_core::GameError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::Game(e @ GameError::SessionFinished) => {
                (StatusCode::CONFLICT, e.code(), e.to_string())
            }
            AppError::Game(e) => (StatusCode::BAD_REQUEST, e.code(), e.to_string()),
            AppError::Sqlx(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Database error".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": message, "code": code }))).into_response()
    }
}
