// ABOUTME: Nutrio - natural-language meal logging assistant with limit tracking
// ABOUTME: Root crate: assistant engine, runtime configuration, logging, CLI support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

#![deny(unsafe_code)]

//! # Nutrio
//!
//! A conversational meal-logging assistant. Free-text utterances in Spanish
//! resolve against the user's food and meal catalogs, fall back to a web
//! lookup when nothing matches, and commit confirmed entries to a REST
//! nutrition store. Daily summaries track per-slot and per-day nutrient
//! totals against configurable limits.
//!
//! The workspace splits along the same seams as the runtime:
//!
//! - [`nutrio_core`]: domain models, provider errors, display formatters
//! - [`nutrio_intelligence`]: quantity extraction, resolution, aggregation
//! - [`nutrio_providers`]: collaborator traits and their REST/in-memory
//!   implementations
//! - this crate: the assistant engine, configuration, logging, and the
//!   `nutrio-cli` binary

/// Conversational assistant engine
pub mod assistant;
/// Environment-driven runtime configuration
pub mod config;
/// Structured logging setup
pub mod logging;

pub use assistant::{Assistant, ChatSession};
pub use config::AppConfig;
pub use logging::LoggingConfig;
