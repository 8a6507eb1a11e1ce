//! # Health Reporter
//!
//! Assembles the [`HealthStatus`] served by the health endpoint from a
//! database probe and the process start instant.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, error, instrument, warn};

use crate::models::{DbStatus, HealthStatus};
use crate::services::db_context::DbContext;

/// Produces health reports. Cheap to share behind an `Arc`; holds no mutable
/// state.
pub struct HealthReporter {
    db_context: Arc<dyn DbContext>,
    started_at: Instant,
    ping_timeout: Duration,
}

impl HealthReporter {
    /// Creates a reporter.
    ///
    /// # Arguments
    ///
    /// * `db_context` - Probe used to check database reachability
    /// * `started_at` - Instant the process started, captured once at startup
    /// * `ping_timeout` - Upper bound on how long a single probe may take
    pub fn new(
        db_context: Arc<dyn DbContext>,
        started_at: Instant,
        ping_timeout: Duration,
    ) -> Self {
        Self {
            db_context,
            started_at,
            ping_timeout,
        }
    }

    pub fn ping_timeout(&self) -> Duration {
        self.ping_timeout
    }

    /// Whole seconds elapsed since process start, truncated.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Builds a fresh health report. Never fails: any probe failure is
    /// reported as [`DbStatus::Disconnected`].
    #[instrument(skip_all)]
    pub async fn get_health(&self) -> HealthStatus {
        let db_status = self.probe_database().await;
        let uptime_seconds = self.uptime_seconds();

        debug!(?db_status, uptime_seconds, "Health report assembled");
        HealthStatus::new(db_status, uptime_seconds)
    }

    /// Runs the probe on its own task so a panicking driver cannot take the
    /// request down with it. The task lives in a request-local `JoinSet`, so it
    /// is aborted on timeout and whenever the caller stops waiting.
    async fn probe_database(&self) -> DbStatus {
        let db_context = Arc::clone(&self.db_context);
        let mut probes = JoinSet::new();
        probes.spawn(async move { db_context.ping().await });

        match timeout(self.ping_timeout, probes.join_next()).await {
            Ok(Some(Ok(Ok(reachable)))) => {
                if !reachable {
                    warn!("Database ping returned an unexpected answer");
                }
                DbStatus::from(reachable)
            }
            Ok(Some(Ok(Err(e)))) => {
                warn!(error = %e, "Database ping failed");
                DbStatus::Disconnected
            }
            Ok(Some(Err(join_error))) => {
                error!(?join_error, "Database ping task did not complete");
                DbStatus::Disconnected
            }
            Ok(None) => DbStatus::Disconnected,
            Err(_) => {
                warn!(
                    timeout_ms = self.ping_timeout.as_millis() as u64,
                    "Database ping timed out"
                );
                DbStatus::Disconnected
            }
        }
    }
}
