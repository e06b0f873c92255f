use anyhow::Result;
use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Create the router for the healthcheck service
fn create_router() -> Router {
    Router::new().route("/healthcheck", get(healthcheck))
}

/// Liveness probe
async fn healthcheck() -> &'static str {
    "OK"
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("HEALTHCHECK_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Healthcheck service listening on 0.0.0.0:{}", port);

    axum::serve(listener, create_router()).await?;

    Ok(())
}
