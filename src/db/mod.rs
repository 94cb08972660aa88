//! Database module
//!
//! This module provides access to the two external read-only SQLite stores:
//! - Connection pool management
//! - Repository pattern implementations
//! - Data models

pub mod manager;
pub mod models;
pub mod repository;

pub use manager::DatabaseManager;
pub use models::Contact;
pub use repository::{ContactRepository, DocumentRepository};
