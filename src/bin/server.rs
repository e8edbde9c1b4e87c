//! Zmanim Tracker HTTP Server Binary
//!
//! Main entry point for the zmanim REST API server: loads configuration,
//! sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin zmanim-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 5001)
//! - `ZMANIM_FILE`, `MINCHA_FILE`, `PARASHA_FILE`: data file paths
//! - `ZMANIM_TZ`: display timezone (default: America/Chicago)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use zmanim_tracker::config::AppConfig;
use zmanim_tracker::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(true)
        .init();

    info!("Starting Zmanim Tracker Server");

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    info!(
        zmanim_file = %config.zmanim_file.display(),
        timezone = %config.timezone,
        "configuration loaded"
    );

    let state = AppState::new(&config)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);
    info!("API available at: http://{}/api/zmanim", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
