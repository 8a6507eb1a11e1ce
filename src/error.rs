//! # Centralized Error Handling
//!
//! This module provides the application error type and its conversion into
//! HTTP responses. Every error leaves the service inside the same
//! [`ApiResponse`] envelope as successful payloads, with `success: false`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::debug;

use crate::models::ApiResponse;

/// Central application error type.
///
/// The health endpoint itself never produces one of these: database trouble
/// is reported as data. They cover the rest of the router surface.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        debug!(%status, reason = message, "Request failed");

        (status, Json(ApiResponse::<()>::fail(message))).into_response()
    }
}
