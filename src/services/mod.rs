//! # Business Logic Services
//!
//! ## Available Services
//!
//! - **Database context** (`db_context`) - Connectivity probe for the backing database
//! - **Health** (`health`) - Health report assembly

pub mod db_context;
pub mod health;
