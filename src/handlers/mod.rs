//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Liveness, database connectivity and uptime
//! - **Fallback** (`fallback`) - Envelope-shaped `404` for unknown routes

mod fallback;
mod health_check;

pub use fallback::*;
pub use health_check::*;
