// ABOUTME: Meal-entry resolution and nutrient aggregation engine
// ABOUTME: Pure computation: quantity extraction, catalog matching, slot detection, summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

#![deny(unsafe_code)]

//! # Nutrio Intelligence
//!
//! The algorithmic core of the assistant: turning free-text utterances into
//! resolution candidates and rolling logged entries up into daily summaries.
//!
//! None of this crate performs I/O; collaborator calls live in
//! `nutrio-providers` and are sequenced by the assistant layer.

/// Nutrient aggregation, limit progress, and severity tiers
pub mod aggregation;
/// Quantity and unit extraction from utterances
pub mod quantity;
/// Local catalog resolution (substring/first-word matching)
pub mod resolver;
/// Meal-slot keyword detection
pub mod slots;

pub use aggregation::{
    assess_day, assess_slot, meal_threshold, percent_of, summarize, DayAssessment, Progress,
    Severity, MEAL_LIMIT_DIVISOR,
};
pub use quantity::{QuantityExtractor, QuantityMatch, QUANTITY_PATTERNS};
pub use resolver::{search_foods, LocalMatches, LocalResolver, MatchOutcome};
pub use slots::{detect_slot, SLOT_KEYWORDS};
