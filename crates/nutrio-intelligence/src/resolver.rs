// ABOUTME: Local catalog resolution: matches utterance text against foods and templates
// ABOUTME: Substring and first-word rules; all matches returned, never a best-match pick
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

//! Local resolution against the user's catalogs
//!
//! A catalog item matches when its name appears in the utterance, or when the
//! item name contains the utterance's first word. Matching is independent per
//! item: one utterance can legitimately produce several candidates, and all
//! of them are surfaced for confirmation rather than auto-picking one.

use nutrio_core::models::{FoodItem, MealTemplate, ResolutionCandidate};

use crate::quantity::QuantityExtractor;

/// Everything the local resolver found for one utterance
#[derive(Debug, Clone, Default)]
pub struct LocalMatches {
    /// Food candidates with extracted quantities
    pub foods: Vec<ResolutionCandidate>,
    /// Matched meal templates; they expand to their fixed lines on commit
    pub templates: Vec<MealTemplate>,
}

impl LocalMatches {
    /// True when neither foods nor templates matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty() && self.templates.is_empty()
    }
}

/// Explicit classification of a food candidate list.
///
/// Callers that want to prompt on ambiguity instead of guessing can branch
/// on this; the assistant itself always surfaces the full list.
#[derive(Debug, Clone)]
pub enum MatchOutcome {
    /// Exactly one interpretation
    Resolved(ResolutionCandidate),
    /// Multiple interpretations; all of them, in catalog order
    Ambiguous(Vec<ResolutionCandidate>),
    /// Nothing matched
    Unresolved,
}

impl MatchOutcome {
    /// Classify a candidate list by cardinality
    #[must_use]
    pub fn classify(mut candidates: Vec<ResolutionCandidate>) -> Self {
        match candidates.len() {
            0 => Self::Unresolved,
            1 => candidates.pop().map_or(Self::Unresolved, Self::Resolved),
            _ => Self::Ambiguous(candidates),
        }
    }
}

/// Matches utterances against the food and template catalogs
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalResolver {
    extractor: QuantityExtractor,
}

impl LocalResolver {
    /// Create a resolver
    #[must_use]
    pub const fn new() -> Self {
        Self {
            extractor: QuantityExtractor::new(),
        }
    }

    /// Resolve an utterance against the catalogs.
    ///
    /// Returns empty sets, never an error, when nothing matches. Duplicates
    /// (one utterance matching several items) are all returned.
    #[must_use]
    pub fn resolve(
        &self,
        utterance: &str,
        foods: &[FoodItem],
        templates: &[MealTemplate],
    ) -> LocalMatches {
        let utterance_lower = utterance.to_lowercase();
        let first_word = utterance_lower
            .split_whitespace()
            .next()
            .unwrap_or_default();

        let mut matches = LocalMatches::default();

        for food in foods {
            if !name_matches(&utterance_lower, first_word, &food.name) {
                continue;
            }
            let extracted = self.extractor.extract(utterance, &food.name);
            matches.foods.push(ResolutionCandidate::from_catalog(
                food.clone(),
                extracted.quantity,
                extracted.mode,
            ));
        }

        for template in templates {
            if name_matches(&utterance_lower, first_word, &template.name) {
                matches.templates.push(template.clone());
            }
        }

        matches
    }
}

/// Case-insensitive substring filter over food names, capped at ten results.
///
/// Backs the interactive food picker; an empty query matches everything up
/// to the cap.
#[must_use]
pub fn search_foods<'a>(query: &str, foods: &'a [FoodItem]) -> Vec<&'a FoodItem> {
    const MAX_RESULTS: usize = 10;
    let query_lower = query.to_lowercase();
    foods
        .iter()
        .filter(|food| food.name.to_lowercase().contains(&query_lower))
        .take(MAX_RESULTS)
        .collect()
}

fn name_matches(utterance_lower: &str, first_word: &str, name: &str) -> bool {
    let name_lower = name.to_lowercase();
    if utterance_lower.contains(&name_lower) {
        return true;
    }
    // First-word rule: the catalog name contains the utterance's leading
    // word. Skipped for empty input, which would otherwise match everything.
    !first_word.is_empty() && name_lower.contains(first_word)
}
