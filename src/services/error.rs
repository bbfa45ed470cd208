use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::password::PasswordError;

/// Errors raised by the entity-creation paths of [`GymService`].
///
/// Operations whose preconditions are expected to fail in normal use
/// (`reserve_class`, `cancel_reservation`, `assign_routine`) return `bool`
/// instead; callers branch on that convention.
///
/// [`GymService`]: crate::services::GymService
#[derive(Error, Debug)]
pub enum GymError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("email {0} is already registered")]
    DuplicateEmail(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("password hashing error: {0}")]
    PasswordHashing(#[from] PasswordError),
}

impl IntoResponse for GymError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            GymError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "Invalid input"),
            GymError::DuplicateEmail(_) => (StatusCode::CONFLICT, "Email already exists"),
            GymError::NotFound(_) => (StatusCode::NOT_FOUND, "Not found"),
            GymError::PasswordHashing(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Password processing error")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
