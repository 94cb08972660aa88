//! Upstream openFDA integration
//!
//! This module provides query construction and the HTTP client for the
//! openFDA device-enforcement and adverse-event endpoints. Response bodies
//! are passed through verbatim; the gateway never interprets their fields.

pub mod openfda;
pub mod query;

pub use openfda::OpenFdaClient;
pub use query::SearchQuery;
