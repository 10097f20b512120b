mod routes;
mod state;

use anyhow::Result;
use axum::Router;
use hab_core::HabConfig;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = HabConfig::load()?;
    let state = AppState::new(&config)?;
    info!("Hospital appointment backend initialized");

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("hab-server listening on http://{}", addr);
    info!("Data file: {}", config.data_path().display());
    info!("Export appointments to CSV: http://{}/api/export", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::appointments::router())
        .merge(routes::export::router())
        .with_state(state)
        .layer(cors)
}
