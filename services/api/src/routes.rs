//! API service routes

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    middleware,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use serde_json::json;
use tracing::{error, info, warn};

use crate::{
    error::{ApiError, ApiResult},
    middleware::require_json_headers,
    models::LookupQuery,
    state::AppState,
    validation::parse_registration,
    workflows,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/users", get(get_user).post(create_user))
        .route_layer(middleware::from_fn(require_json_headers));

    Router::new()
        .route("/checkdb", get(check_db))
        .merge(user_routes)
        .with_state(state)
}

/// Database connectivity probe
pub async fn check_db(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    state.user_store.ping().await.map_err(|e| {
        error!("Cannot connect to DB: {}", e);
        ApiError::DatabaseUnavailable
    })?;

    info!("Database reachable");
    Ok(Json(json!({ "message": "Connected to DB" })))
}

/// Register a new user
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let registration = parse_registration(&body).map_err(ApiError::BadRequest)?;

    let response = workflows::register(
        state.user_store.as_ref(),
        registration,
        Utc::now(),
        state.utc_offset,
    )
    .await?;

    Ok(Json(response))
}

/// Get a user by the `id` query parameter
pub async fn get_user(
    State(state): State<AppState>,
    query: Result<Query<LookupQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query.map_err(|rejection| {
        warn!("Unreadable lookup query: {}", rejection.body_text());
        ApiError::ClientError
    })?;

    let response = workflows::lookup(state.user_store.as_ref(), query.id.as_deref()).await?;

    Ok(Json(response))
}
