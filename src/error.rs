use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Request-scoped failures surfaced by the announcement endpoints.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication required for this action")]
    Unauthenticated,

    #[error("Invalid teacher credentials")]
    InvalidCredentials,

    #[error("{0} must be in YYYY-MM-DD format")]
    InvalidDateFormat(&'static str),

    #[error("Message is required")]
    EmptyMessage,

    #[error("expiration_date is required")]
    MissingExpiration,

    #[error("expiration_date must be on or after start_date")]
    InvalidDateRange,

    #[error("Invalid announcement id")]
    InvalidIdentifier,

    #[error("Announcement not found")]
    NotFound,

    #[error("Retention of {0} days reaches past the earliest representable date")]
    RetentionOutOfRange(u32),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::InvalidDateFormat(_)
            | AppError::EmptyMessage
            | AppError::MissingExpiration
            | AppError::InvalidDateRange
            | AppError::InvalidIdentifier
            | AppError::RetentionOutOfRange(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Store(e) => {
                tracing::error!("Announcement store failure: {:#}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
