//! # Utility Modules
//!
//! - **Constants** (`constant`) - Configuration defaults
//! - **Static objects** (`static_object`) - Lazily parsed environment configuration
//! - **Secrets** (`secret`) - Secret lookup from files or environment variables

pub mod constant;
pub mod secret;
pub mod static_object;
