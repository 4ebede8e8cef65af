// ABOUTME: Core types and formatters for the Nutrio meal logging assistant
// ABOUTME: Foundation crate with domain models, error handling, and display rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

#![deny(unsafe_code)]

//! # Nutrio Core
//!
//! Foundation crate providing shared types for the Nutrio meal logging
//! assistant. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Provider error types shared across collaborator clients
//! - **formatters**: Nutrient display rounding policy
//! - **models**: Core data models (`FoodItem`, `MealTemplate`, `LoggedEntry`, ...)

/// Provider error types shared across collaborator clients
pub mod errors;

/// Nutrient display rounding policy
pub mod formatters;

/// Core data models (`FoodItem`, `MealTemplate`, `LoggedEntry`, limits, summaries)
pub mod models;

pub use errors::{ProviderError, ProviderResult};
pub use formatters::{format_number, format_nutrient};
