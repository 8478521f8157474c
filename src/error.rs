use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("No charging stations available")]
    NoStationsAvailable,

    #[error("No suitable charging station: {0}")]
    NoSuitableStation(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal database error")
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::RateLimited => {
                tracing::warn!("Route planning rate limit exceeded");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    "Too many planning requests, retry later",
                )
            }
            AppError::NoStationsAvailable => {
                tracing::warn!("No operational charging stations in catalogue");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "No charging stations are currently available",
                )
            }
            AppError::NoSuitableStation(ref e) => {
                tracing::info!("No suitable charging station: {}", e);
                (StatusCode::BAD_REQUEST, e.as_str())
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::RateLimited, StatusCode::TOO_MANY_REQUESTS),
            (AppError::NoStationsAvailable, StatusCode::SERVICE_UNAVAILABLE),
            (
                AppError::NoSuitableStation("too far".into()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
