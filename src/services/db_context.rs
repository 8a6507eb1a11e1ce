//! # Database Context
//!
//! Connectivity probing for the backing database. The trait lets the health
//! reporter stay independent of the driver, and lets tests substitute probes
//! that succeed, fail, hang or panic on demand.
//!
//! ## Implementations
//!
//! - [`PgDbContext`] - PostgreSQL probe running `SELECT 1` over an sqlx pool

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors that can occur while probing the database
#[derive(Debug, Error)]
pub enum DbContextError {
    #[error("database query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Trait for database connectivity probes
#[async_trait]
pub trait DbContext: Send + Sync {
    /// Checks whether the database answers.
    ///
    /// `Ok(false)` means the database responded but not as expected.
    ///
    /// # Errors
    ///
    /// Returns [`DbContextError`] when the database cannot be reached at all
    /// (pool exhausted, connection refused, query rejected).
    async fn ping(&self) -> Result<bool, DbContextError>;
}

/// PostgreSQL connectivity probe
pub struct PgDbContext {
    pool: PgPool,
}

impl PgDbContext {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DbContext for PgDbContext {
    #[instrument(skip_all)]
    async fn ping(&self) -> Result<bool, DbContextError> {
        let one: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await?;

        debug!(result = one, "Database ping answered");
        Ok(one == 1)
    }
}
