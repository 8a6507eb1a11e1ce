//! # Health Check Handler
//!
//! Health endpoint for load balancers, orchestrators and monitoring systems.
//! Reports liveness, database connectivity and uptime.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{debug, instrument};

use crate::models::{ApiResponse, AppState, HealthStatus};

/// Reports the health of the service.
///
/// GET /health
///
/// Unauthenticated. The database is probed on every call; an unreachable
/// database is reported as `"Disconnected"` rather than as an error.
///
/// # Returns
///
/// Always `200 OK` with an [`ApiResponse`] wrapping a [`HealthStatus`].
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<HealthStatus>> {
    debug!("Health check endpoint accessed");

    let health = state.health_reporter.get_health().await;
    Json(ApiResponse::ok(health))
}
