mod config;
mod db;
mod errors;
mod extract;
mod models;
mod posts;
mod routes;
mod seo;
mod slug;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SEO API v{}", env!("CARGO_PKG_VERSION"));

    // Content store is optional; scoring and slugs work without it
    let db = match &config.database_url {
        Some(url) => Some(create_pool(url, config.db_max_connections).await?),
        None => {
            warn!("DATABASE_URL not set, /api/v1/posts routes will return 503");
            None
        }
    };

    info!("Slug cache capacity: {}", config.slug_cache_capacity);
    let state = AppState::new(db, config.clone());

    // The editor is served from a different origin
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
