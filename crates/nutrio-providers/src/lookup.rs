// ABOUTME: REST client for the external food lookup service
// ABOUTME: Resolves free text into product candidates with nutrient estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

//! REST food lookup client
//!
//! Sends the unresolved text to the lookup service and decodes the candidate
//! list. Candidates carry a provenance tag so replies can tell the user where
//! an estimate came from.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use nutrio_core::errors::{ProviderError, ProviderResult};
use nutrio_core::models::ProductCandidate;

use crate::core::FoodLookup;
use crate::rest::{build_http_client, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};

const SERVICE: &str = "food-lookup";

/// Food lookup endpoint configuration
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Base URL of the lookup service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5066/api".to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

#[derive(Serialize)]
struct LookupRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    products: Vec<ProductCandidate>,
}

/// REST implementation of [`FoodLookup`]
#[derive(Debug, Clone)]
pub struct RestLookup {
    config: LookupConfig,
    client: Client,
}

impl RestLookup {
    /// Create a client for the given endpoint configuration.
    ///
    /// The lookup service gets its own HTTP client so a slow lookup backend
    /// cannot starve store traffic of pooled connections.
    pub fn new(config: LookupConfig) -> ProviderResult<Self> {
        let client =
            build_http_client(SERVICE, config.timeout_secs, config.connect_timeout_secs)?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl FoodLookup for RestLookup {
    async fn lookup(&self, query: &str) -> ProviderResult<Vec<ProductCandidate>> {
        let url = format!("{}/lookup", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .json(&LookupRequest { query })
            .send()
            .await
            .map_err(|e| ProviderError::network(SERVICE, e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        debug!(query, status = status.as_u16(), "food lookup call");

        if !status.is_success() {
            return Err(ProviderError::api(SERVICE, status.as_u16(), text));
        }

        let decoded: LookupResponse =
            serde_json::from_str(&text).map_err(|source| ProviderError::Parse {
                service: SERVICE,
                context: "lookup",
                source,
            })?;
        Ok(decoded.products)
    }
}
