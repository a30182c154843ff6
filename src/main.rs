//! Server binary: load config from env, open the store, ensure tables exist,
//! mount common and resource routes.

use axum::extract::DefaultBodyLimit;
use axum::Router;
use holocron::{api_routes, common_routes_with_ready, AppConfig, AppState};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("holocron=info".parse()?))
        .init();

    let config = AppConfig::from_env();
    let pool = holocron::connect(&config.database_url).await?;
    holocron::init_schema(&pool).await?;
    let state = AppState { pool };

    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(api_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        );

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
