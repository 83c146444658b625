use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod generator;
mod handlers;
mod models;
mod provider;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,nation_currency_service=debug".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("Nation & Currency Service {}", env!("CARGO_PKG_VERSION"));

    let app = build_router();

    let addr = config.addr();
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Handlers are stateless: record endpoints build a fresh provider per request.
fn build_router() -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .route("/version", get(handlers::version))
        .route("/nations", get(handlers::records::nations))
        .route("/currencies", get(handlers::records::currencies))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
