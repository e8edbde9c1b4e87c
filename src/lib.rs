//! # Zmanim Tracker
//!
//! Computes and serves halachic (Jewish religious) prayer and calendar
//! times for a single fixed location. A precomputed daily set of
//! astronomical times is read from disk, classified against the current
//! moment, and exposed over a REST API for an e-ink display plugin.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`config`]: Runtime configuration loaded from environment variables
//! - [`models`]: The daily time set, liturgical periods, and error taxonomy
//! - [`services`]: Period classification and next-event projection (the core)
//! - [`store`]: File-backed adapters for the daily times and scraped overrides
//! - [`hebcal`]: Remote Hebrew-calendar lookups (Hebrew date, weekly reading)
//! - [`scraper`]: Best-effort Mincha time extraction from a published PDF calendar
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Two scheduled binaries (`mincha-scraper`, `update-parasha`) refresh the
//! files the server reads; the server itself holds no mutable state and
//! recomputes every answer from fresh reads.

pub mod config;
pub mod models;
pub mod services;
pub mod store;

pub mod hebcal;
pub mod scraper;

pub mod http;
