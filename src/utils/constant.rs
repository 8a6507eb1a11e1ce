//! # Application Constants
//!
//! Defaults used when the corresponding environment variables are absent.

use std::time::Duration;

/// Address the HTTP server listens on
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8090";

/// Upper bound on a single database ping
///
/// Keeps the health check responsive when the database hangs.
pub const DEFAULT_DB_PING_TIMEOUT: Duration = Duration::from_millis(2000);

/// Maximum number of pooled database connections
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "item_service=info,tower_http=info";

/// How long in-flight requests may take to finish after a shutdown signal
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(30);
