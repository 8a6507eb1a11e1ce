use tracing::{debug, info};

use crate::services::health::HealthReporter;

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// Builds the health report served at `/health`.
    pub health_reporter: HealthReporter,
}

impl AppState {
    /// Creates a new application state around the given reporter.
    pub fn new(health_reporter: HealthReporter) -> Self {
        info!("Initializing application state");
        debug!(
            ping_timeout_ms = health_reporter.ping_timeout().as_millis() as u64,
            "Health reporter configured"
        );

        Self { health_reporter }
    }
}
