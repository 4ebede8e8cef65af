// ABOUTME: Error types for external collaborator calls (persistence and lookup)
// ABOUTME: Network, API, and parse failures with retryability classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

//! Provider error types
//!
//! All collaborator clients (the nutrition store and the external food
//! lookup) report failures through [`ProviderError`]. Callers decide whether
//! a failure is fatal; the assistant degrades lookup failures to an empty
//! result rather than surfacing transport errors to the user.

use thiserror::Error;

/// Result alias for collaborator calls
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors produced by external collaborator clients
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (connect, timeout, DNS)
    #[error("network error calling {service}: {message}")]
    Network {
        /// Collaborator that failed
        service: &'static str,
        /// Underlying transport error description
        message: String,
    },

    /// The collaborator answered with a non-success HTTP status
    #[error("{service} returned HTTP {status}: {message}")]
    Api {
        /// Collaborator that failed
        service: &'static str,
        /// HTTP status code of the response
        status: u16,
        /// Response body, if any
        message: String,
        /// Whether retrying the call may succeed (server errors only)
        retryable: bool,
    },

    /// The collaborator answered but the payload did not deserialize
    #[error("failed to parse {service} response ({context}): {source}")]
    Parse {
        /// Collaborator whose payload failed to parse
        service: &'static str,
        /// Which payload was being parsed
        context: &'static str,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

impl ProviderError {
    /// Create a network error for a collaborator
    #[must_use]
    pub fn network(service: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            service,
            message: message.into(),
        }
    }

    /// Create an API error; retryability follows from the status class
    #[must_use]
    pub fn api(service: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            service,
            status,
            message: message.into(),
            retryable: (500..600).contains(&status),
        }
    }

    /// Whether retrying the operation may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Api { retryable, .. } => *retryable,
            Self::Parse { .. } => false,
        }
    }
}
