//! Header guard for the user routes

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::warn;

use crate::{
    error::ApiError,
    validation::{validate_content_type, validate_request_date},
};

/// Reject requests lacking `Content-Type: application/json` or a valid `Request-Date`
pub async fn require_json_headers(req: Request, next: Next) -> Result<Response, ApiError> {
    validate_content_type(req.headers())
        .and_then(|_| validate_request_date(req.headers()))
        .map_err(|msg| {
            warn!("Rejected {} {}: {}", req.method(), req.uri().path(), msg);
            ApiError::BadRequest(msg)
        })?;

    Ok(next.run(req).await)
}
