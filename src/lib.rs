//! # Item Service
//!
//! Backend service exposing a health endpoint that reports liveness,
//! database connectivity and uptime.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`models`] - Response payloads, the response envelope and shared state
//! - [`services`] - Database probing and health report assembly
//! - [`utils`] - Constants and environment configuration

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;
use std::time::Instant;

use axum::{Router, routing::get};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers::{health_check, not_found};
use crate::models::AppState;
use crate::services::db_context::PgDbContext;
use crate::services::health::HealthReporter;
use crate::utils::static_object::DB_PING_TIMEOUT;

/// Creates an Axum router that probes the given PostgreSQL pool.
///
/// This is a convenience function that wires a [`PgDbContext`] into a
/// [`HealthReporter`] and calls [`app_with_reporter`].
///
/// # Arguments
///
/// * `db_pool` - PostgreSQL database connection pool
/// * `started_at` - Instant the process started, captured once at startup
///
/// # Environment Variables
///
/// - `DB_PING_TIMEOUT_MS` - Upper bound on a single database ping
pub fn app(db_pool: PgPool, started_at: Instant) -> Router {
    let db_context = Arc::new(PgDbContext::new(db_pool));
    let reporter = HealthReporter::new(db_context, started_at, *DB_PING_TIMEOUT);
    app_with_reporter(reporter)
}

/// Creates an Axum router with application routes and state.
pub fn app_with_reporter(reporter: HealthReporter) -> Router {
    info!("Building application router");
    let state = Arc::new(AppState::new(reporter));

    Router::new()
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
