// ABOUTME: External collaborator clients for the Nutrio assistant
// ABOUTME: Store and lookup traits, REST implementations, in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

#![deny(unsafe_code)]

//! # Nutrio Providers
//!
//! Collaborator abstractions and implementations. The assistant core talks to
//! two external services through the traits in [`core`]:
//!
//! - the **nutrition store**, a REST backend owning foods, meal templates,
//!   logged entries, and limits;
//! - the **food lookup**, which resolves unknown text to product candidates
//!   with nutrient estimates and a provenance tag.
//!
//! [`rest`] and [`lookup`] bind those traits over HTTP/JSON; [`memory`]
//! provides an in-process store for tests and offline runs.

// Re-export nutrio-core error types so collaborator call sites read naturally.
pub use nutrio_core::errors;

/// Core collaborator traits
pub mod core;
/// REST food lookup client
pub mod lookup;
/// In-memory store and scripted lookup for tests and offline use
pub mod memory;
/// REST nutrition store client
pub mod rest;

pub use crate::core::{FoodLookup, NutritionStore};
pub use lookup::{LookupConfig, RestLookup};
pub use memory::{MemoryStore, ScriptedLookup};
pub use nutrio_core::errors::{ProviderError, ProviderResult};
pub use rest::{RestConfig, RestStore};
