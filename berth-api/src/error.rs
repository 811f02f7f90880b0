use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use berth_domain::BookingError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::InvalidSeat(_) | BookingError::AlreadyBooked(_) => {
                Self::ValidationError(err.to_string())
            }
            BookingError::BookingNotFound(_) => Self::NotFoundError(err.to_string()),
        }
    }
}

// Missing fields and non-JSON bodies surface as 400 with the usual error body
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self::ValidationError(rejection.body_text())
    }
}
