use std::env;
use std::sync::LazyLock;
use std::time::Duration;

use tracing::error;

use super::constant::{DEFAULT_BIND_ADDR, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_DB_PING_TIMEOUT};

pub static BIND_ADDR: LazyLock<String> = LazyLock::new(|| {
    env::var("BIND_ADDR").unwrap_or_else(|_| {
        error!("Missing BIND_ADDR env var, using fallback '{DEFAULT_BIND_ADDR}'");
        DEFAULT_BIND_ADDR.to_string()
    })
});

pub static DB_PING_TIMEOUT: LazyLock<Duration> = LazyLock::new(|| {
    env::var("DB_PING_TIMEOUT_MS")
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .filter(|&ms| ms > 0)
        .map(Duration::from_millis)
        .unwrap_or_else(|| {
            error!(
                "Invalid or missing DB_PING_TIMEOUT_MS env var, using fallback {}",
                DEFAULT_DB_PING_TIMEOUT.as_millis()
            );
            DEFAULT_DB_PING_TIMEOUT
        })
});

pub static DB_MAX_CONNECTIONS: LazyLock<u32> = LazyLock::new(|| {
    env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|val| val.parse::<u32>().ok())
        .filter(|&n| n > 0)
        .unwrap_or_else(|| {
            error!(
                "Invalid or missing DB_MAX_CONNECTIONS env var, using fallback {DEFAULT_DB_MAX_CONNECTIONS}"
            );
            DEFAULT_DB_MAX_CONNECTIONS
        })
});

/// Whether the service runs in production (`APP_ENV=production`, case-insensitive).
pub static IS_PRODUCTION: LazyLock<bool> = LazyLock::new(|| {
    env::var("APP_ENV")
        .map(|val| val.eq_ignore_ascii_case("production"))
        .unwrap_or(false)
});
