//! medreg-gateway Library
//!
//! This library provides the core functionality for the medreg gateway: a
//! small HTTP API aggregating regulatory data for medical-device compliance
//! research from local stores, the openFDA device APIs, and the FDA
//! warning-letters search page.

pub mod api;
pub mod core;
pub mod db;
pub mod scrape;
pub mod upstream;

// Re-export commonly used types
pub use api::ApiServer;
pub use crate::core::{Config, GatewayError, Logger};
pub use db::DatabaseManager;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for the library
pub type Result<T> = anyhow::Result<T>;
