#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use axum::Router;
use item_service::services::db_context::{DbContext, DbContextError};
use item_service::services::health::HealthReporter;
use serde_json::Value;
use tokio::net::TcpListener;

pub const TEST_PING_TIMEOUT: Duration = Duration::from_millis(300);

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("item_service=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Probe that always answers with the configured value and counts calls.
#[derive(Debug, Default)]
pub struct StaticDbContext {
    reachable: bool,
    calls: AtomicUsize,
}

impl StaticDbContext {
    pub fn new(reachable: bool) -> Self {
        Self {
            reachable,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DbContext for StaticDbContext {
    async fn ping(&self) -> Result<bool, DbContextError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reachable)
    }
}

/// Probe that always errors, as a driver would on connection refusal.
pub struct FailingDbContext;

#[async_trait]
impl DbContext for FailingDbContext {
    async fn ping(&self) -> Result<bool, DbContextError> {
        Err(DbContextError::Query(sqlx::Error::PoolTimedOut))
    }
}

/// Probe that never completes.
pub struct HangingDbContext;

#[async_trait]
impl DbContext for HangingDbContext {
    async fn ping(&self) -> Result<bool, DbContextError> {
        std::future::pending().await
    }
}

/// Hanging probe that tracks how many pings are still running.
#[derive(Debug, Default)]
pub struct TrackedHangingDbContext {
    in_flight: Arc<AtomicUsize>,
}

impl TrackedHangingDbContext {
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

/// Decrements the in-flight count when the ping future is dropped.
struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DbContext for TrackedHangingDbContext {
    async fn ping(&self) -> Result<bool, DbContextError> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let _guard = InFlightGuard(Arc::clone(&self.in_flight));
        std::future::pending().await
    }
}

/// Probe whose driver panics mid-call.
pub struct PanickingDbContext;

#[async_trait]
impl DbContext for PanickingDbContext {
    async fn ping(&self) -> Result<bool, DbContextError> {
        panic!("driver blew up");
    }
}

pub fn reporter(db_context: Arc<dyn DbContext>, started_at: Instant) -> HealthReporter {
    HealthReporter::new(db_context, started_at, TEST_PING_TIMEOUT)
}

/// Serves `app` on a random localhost port.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn serve(app: Router) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{port}")
}

/// Spawns the application around a reporter built from `db_context`.
pub async fn spawn_app(db_context: Arc<dyn DbContext>, started_at: Instant) -> String {
    serve(item_service::app_with_reporter(reporter(db_context, started_at))).await
}

/// Calls `GET /health`, asserts `200 OK`, and returns the parsed body.
pub async fn get_health(client: &reqwest::Client, address: &str) -> Value {
    let response = client
        .get(format!("{address}/health"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    response.json().await.expect("Failed to parse response")
}

/// Parses the `"<n>s"` uptime field of a health body.
pub fn uptime_of(body: &Value) -> u64 {
    body["data"]["uptime"]
        .as_str()
        .and_then(|s| s.strip_suffix('s'))
        .and_then(|n| n.parse().ok())
        .expect("uptime should be formatted as `<n>s`")
}
