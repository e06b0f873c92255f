//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed request: headers, body or field formats
    #[error("{0}")]
    BadRequest(String),

    /// The email is already registered
    #[error("Email Already Exist")]
    Conflict,

    /// Lookup target missing. Answered with 403, not 404.
    #[error("User Not Existing")]
    Forbidden,

    /// Generic downstream failure
    #[error("Client Error Response")]
    ClientError,

    /// Store failure; the detail is logged and never sent to the client
    #[error("Database error: {0}")]
    Store(#[from] common::error::DatabaseError),

    /// Connectivity probe failed
    #[error("Cannot connect to DB")]
    DatabaseUnavailable,
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::ClientError | ApiError::Store(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::DatabaseUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            ApiError::Store(e) => {
                error!("Store failure: {}", e);
                ApiError::ClientError.to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
