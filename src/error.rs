use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures a request can surface to the client.
///
/// Validation failures map to 400 and must not be retried; persistence
/// failures map to 500 and are safe to retry with the same idempotency key.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("unknown room {0:?}")]
    UnknownRoom(String),
    #[error("room {0:?} is not available for booking")]
    RoomUnavailable(String),
    #[error("persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::UnknownRoom(_) | ApiError::RoomUnavailable(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            ApiError::Validation(_) | ApiError::UnknownRoom(_) | ApiError::RoomUnavailable(_) => {
                "Invalid booking request"
            }
            ApiError::Persistence(_) => "Failed to reach the booking store",
        };
        HttpResponse::build(self.status_code()).json(json!({
            "error": error,
            "details": self.to_string(),
        }))
    }
}
