// ABOUTME: Transient resolution candidates produced by the parsing engine
// ABOUTME: A tentative (food, quantity, mode) interpretation pending user confirmation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

use serde::{Deserialize, Serialize};

use super::food::{FoodItem, QuantityMode};
use super::lookup::ProductCandidate;

/// Where a resolution candidate came from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "source")]
pub enum CandidateSource {
    /// Matched against the user's local food catalog
    Catalog {
        /// The matched food
        food: FoodItem,
    },
    /// Returned by the external lookup collaborator
    Lookup {
        /// The looked-up product snapshot
        product: ProductCandidate,
    },
}

/// A tentative interpretation of user text, never persisted.
///
/// Lives for a single parse-and-confirm cycle; commit turns it into a
/// [`super::entry::LoggedEntry`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolutionCandidate {
    /// Matched food or looked-up product
    #[serde(flatten)]
    pub source: CandidateSource,
    /// Raw quantity as extracted from the utterance
    pub quantity: f64,
    /// Whether the quantity counts servings or grams
    pub mode: QuantityMode,
}

impl ResolutionCandidate {
    /// Candidate for a catalog food with an extracted quantity
    #[must_use]
    pub const fn from_catalog(food: FoodItem, quantity: f64, mode: QuantityMode) -> Self {
        Self {
            source: CandidateSource::Catalog { food },
            quantity,
            mode,
        }
    }

    /// Candidate for a web-sourced product, defaulting to one portion
    #[must_use]
    pub const fn from_lookup(product: ProductCandidate) -> Self {
        Self {
            source: CandidateSource::Lookup { product },
            quantity: 1.0,
            mode: QuantityMode::ServingCount,
        }
    }

    /// Display name of the underlying food or product
    #[must_use]
    pub fn name(&self) -> &str {
        match &self.source {
            CandidateSource::Catalog { food } => &food.name,
            CandidateSource::Lookup { product } => &product.name,
        }
    }

    /// Portion weight used for serving-count normalization
    #[must_use]
    pub fn portion_weight(&self) -> f64 {
        match &self.source {
            CandidateSource::Catalog { food } => food.portion_weight(),
            CandidateSource::Lookup { product } => product.portion_weight(),
        }
    }

    /// Canonical gram weight of this candidate
    #[must_use]
    pub fn grams(&self) -> f64 {
        match self.mode {
            QuantityMode::ServingCount => self.quantity * self.portion_weight(),
            QuantityMode::GramWeight => self.quantity,
        }
    }

    /// Human-readable quantity, matching the confirmation prompts
    #[must_use]
    pub fn describe_quantity(&self) -> String {
        match self.mode {
            QuantityMode::ServingCount => format!("{} porción(es)", self.quantity),
            QuantityMode::GramWeight => format!("{}g", self.quantity),
        }
    }
}
