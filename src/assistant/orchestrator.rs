// ABOUTME: Two-phase turn resolution: local catalog first, then the web lookup
// ABOUTME: Lookup transport failures degrade to the no-match outcome, never surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

//! Fallback orchestration
//!
//! Local resolution always runs first; the web lookup is only consulted when
//! the catalogs produce nothing. A failing lookup is logged and treated as
//! "no match", so the conversation keeps its footing when the external
//! service is down.

use tracing::{debug, warn};

use nutrio_core::models::{FoodItem, MealTemplate, ProductCandidate};
use nutrio_intelligence::{LocalMatches, LocalResolver};
use nutrio_providers::FoodLookup;

/// How one utterance resolved
#[derive(Debug, Clone)]
pub enum TurnResolution {
    /// The local catalogs produced at least one candidate
    Local(LocalMatches),
    /// Nothing local; the web lookup answered with candidates
    Web(Vec<ProductCandidate>),
    /// Neither the catalogs nor the lookup produced anything usable
    NoMatch,
}

/// Resolves utterances with the local-first, web-fallback strategy
pub struct FallbackOrchestrator<'a> {
    resolver: LocalResolver,
    lookup: &'a dyn FoodLookup,
}

impl<'a> FallbackOrchestrator<'a> {
    /// Create an orchestrator over the given lookup collaborator
    #[must_use]
    pub const fn new(lookup: &'a dyn FoodLookup) -> Self {
        Self {
            resolver: LocalResolver::new(),
            lookup,
        }
    }

    /// Resolve one utterance against the catalogs, falling back to the web.
    ///
    /// The lookup phase only runs when local resolution is empty; a local hit
    /// never mixes with web candidates in one turn.
    pub async fn resolve_turn(
        &self,
        utterance: &str,
        foods: &[FoodItem],
        templates: &[MealTemplate],
    ) -> TurnResolution {
        let local = self.resolver.resolve(utterance, foods, templates);
        if !local.is_empty() {
            debug!(
                foods = local.foods.len(),
                templates = local.templates.len(),
                "resolved locally"
            );
            return TurnResolution::Local(local);
        }

        match self.lookup.lookup(utterance).await {
            Ok(products) if products.is_empty() => TurnResolution::NoMatch,
            Ok(products) => {
                debug!(products = products.len(), "resolved via web lookup");
                TurnResolution::Web(products)
            }
            Err(error) => {
                warn!(%error, "food lookup failed; treating turn as unmatched");
                TurnResolution::NoMatch
            }
        }
    }
}
