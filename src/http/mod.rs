//! HTTP server module.
//!
//! Exposes the classifier and projector over a small axum REST API plus
//! the server-rendered display markup for the e-ink plugin.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - JSON serialization, CORS, compression, tracing         │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (classifier, projector, snapshot)          │
//! └───────────────────┬──────────────────────────────────────┘
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Adapters (zmanim/mincha/parasha files, hebcal client)    │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
