// ABOUTME: Environment-driven runtime configuration for the assistant
// ABOUTME: Collaborator endpoints and HTTP timeouts, with development defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

//! Runtime configuration
//!
//! All settings come from environment variables with development defaults, so
//! a bare `nutrio-cli` run works against a local backend.

use std::env;

use nutrio_providers::lookup::LookupConfig;
use nutrio_providers::rest::RestConfig;

/// Default nutrition store and lookup endpoint
const DEFAULT_API_URL: &str = "http://localhost:5066/api";

/// Runtime configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Nutrition store base URL (`NUTRIO_API_URL`)
    pub api_url: String,
    /// Food lookup base URL (`NUTRIO_LOOKUP_URL`, defaults to the store URL)
    pub lookup_url: String,
    /// HTTP request timeout in seconds (`NUTRIO_HTTP_TIMEOUT_SECS`)
    pub http_timeout_secs: u64,
    /// HTTP connect timeout in seconds (`NUTRIO_HTTP_CONNECT_TIMEOUT_SECS`)
    pub http_connect_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            lookup_url: DEFAULT_API_URL.to_owned(),
            http_timeout_secs: 30,
            http_connect_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let api_url = env::var("NUTRIO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let lookup_url = env::var("NUTRIO_LOOKUP_URL").unwrap_or_else(|_| api_url.clone());

        Self {
            api_url,
            lookup_url,
            http_timeout_secs: env_u64("NUTRIO_HTTP_TIMEOUT_SECS", 30),
            http_connect_timeout_secs: env_u64("NUTRIO_HTTP_CONNECT_TIMEOUT_SECS", 10),
        }
    }

    /// Nutrition store client configuration
    #[must_use]
    pub fn rest_config(&self) -> RestConfig {
        RestConfig {
            base_url: self.api_url.clone(),
            timeout_secs: self.http_timeout_secs,
            connect_timeout_secs: self.http_connect_timeout_secs,
        }
    }

    /// Food lookup client configuration
    #[must_use]
    pub fn lookup_config(&self) -> LookupConfig {
        LookupConfig {
            base_url: self.lookup_url.clone(),
            timeout_secs: self.http_timeout_secs,
            connect_timeout_secs: self.http_connect_timeout_secs,
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
