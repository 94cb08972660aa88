//! openFDA device API client
//!
//! One reqwest client shared by the enforcement and adverse-event endpoints.
//! Policy: explicit request timeout from configuration, no retries; a failed
//! call is terminal for the request that triggered it.

use crate::core::config::OpenFdaConfig;
use crate::core::error::{GatewayError, Result};
use crate::upstream::query::SearchQuery;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Client for the openFDA device endpoints
pub struct OpenFdaClient {
    http: Client,
    config: OpenFdaConfig,
}

impl OpenFdaClient {
    /// Create a new client from configuration
    pub fn new(config: OpenFdaConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self { http, config })
    }

    /// Query the device-enforcement endpoint, returning the body verbatim
    pub async fn device_enforcement(&self, query: &SearchQuery) -> Result<Value> {
        self.fetch(&self.config.enforcement_url, query).await
    }

    /// Query the device adverse-event endpoint, returning the body verbatim
    pub async fn device_events(&self, query: &SearchQuery) -> Result<Value> {
        self.fetch(&self.config.event_url, query).await
    }

    async fn fetch(&self, endpoint: &str, query: &SearchQuery) -> Result<Value> {
        // The key check runs before any I/O: its absence is a configuration
        // error, not an upstream one.
        if self.config.api_key.is_empty() {
            return Err(GatewayError::MissingApiKey);
        }

        let search = query.build();
        let limit = self.config.result_limit.to_string();

        tracing::info!(endpoint, search = %search, "Querying openFDA");

        let response = self
            .http
            .get(endpoint)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("search", search.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::UpstreamStatus(status));
        }

        Ok(response.json().await?)
    }
}
