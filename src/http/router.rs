//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, compression, tracing) and
//! returns the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The display plugin fetches cross-origin; nothing here is sensitive.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home))
        .route("/api/zmanim", get(handlers::zmanim_api))
        .route("/api/next", get(handlers::next_api))
        .route("/health", get(handlers::health))
        .route("/html", get(handlers::html_markup))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(&AppConfig::default()).unwrap();
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
