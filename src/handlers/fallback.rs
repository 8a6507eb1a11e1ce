use axum::http::Uri;
use tracing::debug;

use crate::error::AppError;

/// Answers any route the router does not know with a `404` failure envelope.
pub async fn not_found(uri: Uri) -> AppError {
    debug!(%uri, "No route matched");
    AppError::NotFound("Resource not found")
}
