use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("intent with name {0} not supported")]
    UnsupportedIntent(String),

    #[error("bot provider error: {0}")]
    Bot(String),

    #[error("queue error: {0}")]
    Queue(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedIntent(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Bot(_) => StatusCode::BAD_GATEWAY,
            AppError::Queue(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
