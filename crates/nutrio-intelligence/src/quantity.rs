// ABOUTME: Quantity and unit extraction: finds a number adjacent to a food name
// ABOUTME: Pattern rules are data; no match degrades to one serving, never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

//! Quantity extraction from free-text utterances
//!
//! Given "Comí 2 huevos y 100g de pan" and the food name "pan", extraction
//! finds `100` and classifies it as a gram weight because a weight-unit token
//! sits next to the number. This is a best-effort heuristic over a small
//! pattern table, not a grammar; ambiguous utterances may mis-resolve and the
//! default of one serving always applies when nothing matches.

use std::sync::OnceLock;

use regex::Regex;

use nutrio_core::models::QuantityMode;

/// Pattern templates tried in order against the utterance.
///
/// `{name}` is replaced with the regex-escaped, lowercased food name. The
/// first template accepts an optional weight-unit token (captured as `unit`)
/// and an optional "de" between the number and the name; the second is the
/// bare number-before-name fallback.
pub const QUANTITY_PATTERNS: [&str; 2] = [
    r"(\d+(?:\.\d+)?)\s*(?P<unit>g|gramos?|gr|ml|mililitros?)?\s*(?:de\s+)?{name}",
    r"(\d+(?:\.\d+)?)\s+{name}",
];

/// Standalone weight-unit token rule. A token elsewhere in the utterance
/// ("pan, 100 g") still switches a matched quantity to grams even when the
/// adjacent `unit` group did not participate.
const WEIGHT_UNIT_PATTERN: &str = r"(?i)\b(g|gramos?|gr|ml|mililitros?)\b";

fn weight_unit_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(WEIGHT_UNIT_PATTERN).ok())
        .as_ref()
}

/// An extracted quantity and its interpretation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityMatch {
    /// Numeric quantity from the utterance, or 1 when nothing matched
    pub quantity: f64,
    /// Serving count or gram weight
    pub mode: QuantityMode,
}

impl Default for QuantityMatch {
    fn default() -> Self {
        Self {
            quantity: 1.0,
            mode: QuantityMode::ServingCount,
        }
    }
}

/// Extracts quantities for food names out of utterances.
///
/// Stateless apart from the shared compiled unit rule; name-specific patterns
/// are compiled per extraction because the name is interpolated.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantityExtractor;

impl QuantityExtractor {
    /// Create an extractor
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Extract a quantity for `food_name` from `utterance`.
    ///
    /// Tries each template in [`QUANTITY_PATTERNS`] in order,
    /// case-insensitively. On the first hit the captured number becomes the
    /// quantity; the mode is [`QuantityMode::GramWeight`] when a weight-unit
    /// token was captured next to the number, or when one appears standalone
    /// anywhere in the utterance. No hit (or a pathological name whose
    /// pattern fails to compile) yields the default of one serving; this
    /// never errors.
    #[must_use]
    pub fn extract(&self, utterance: &str, food_name: &str) -> QuantityMatch {
        let escaped = regex::escape(&food_name.to_lowercase());

        for template in QUANTITY_PATTERNS {
            let pattern = format!("(?i){}", template.replace("{name}", &escaped));
            let Ok(re) = Regex::new(&pattern) else {
                tracing::debug!(food_name, "quantity pattern failed to compile");
                continue;
            };
            let Some(caps) = re.captures(utterance) else {
                continue;
            };
            let Some(quantity) = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()) else {
                continue;
            };

            let adjacent_unit = caps.name("unit").is_some_and(|m| !m.as_str().is_empty());
            let standalone_unit =
                weight_unit_regex().is_some_and(|unit| unit.is_match(utterance));
            let mode = if adjacent_unit || standalone_unit {
                QuantityMode::GramWeight
            } else {
                QuantityMode::ServingCount
            };
            return QuantityMatch { quantity, mode };
        }

        QuantityMatch::default()
    }
}
