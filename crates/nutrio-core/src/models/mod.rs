// ABOUTME: Core data models for foods, templates, logged entries, and limits
// ABOUTME: Module organization and re-exports for the Nutrio domain types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

//! Domain models for meal logging and nutrient tracking

/// Resolution candidates produced by the parsing engine
pub mod candidate;
/// Logged entries and meal slots
pub mod entry;
/// Food items and quantity modes
pub mod food;
/// Daily nutrient limits
pub mod limits;
/// Externally looked-up product candidates and provenance
pub mod lookup;
/// Nutrient totals and daily summaries
pub mod summary;
/// Meal templates (saved meals with fixed lines)
pub mod template;

pub use candidate::{CandidateSource, ResolutionCandidate};
pub use entry::{LoggedEntry, MealSlot, NewEntry};
pub use food::{FoodItem, NewFood, QuantityMode, DEFAULT_PORTION_WEIGHT};
pub use limits::DailyLimits;
pub use lookup::{ProductCandidate, Provenance};
pub use summary::{DailySummary, NutrientTotals, SlotTotals};
pub use template::{MealTemplate, MealTemplateDetail, TemplateLine};
