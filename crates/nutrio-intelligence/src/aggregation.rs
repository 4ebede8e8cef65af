// ABOUTME: Nutrient aggregation engine: per-slot and per-day sums with limit progress
// ABOUTME: Fixed /4 per-meal thresholds and the nominal/warning/critical severity tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

//! Aggregation of logged entries into daily summaries
//!
//! Summaries are recomputed on every read from the entry list and the food
//! catalog; nothing here is cached or persisted. Each entry contributes
//! `nutrient × grams / base_portion_weight` to its slot and to the day.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use nutrio_core::models::{
    DailyLimits, DailySummary, FoodItem, LoggedEntry, MealSlot, NutrientTotals, SlotTotals,
};

/// Per-meal thresholds divide the daily limit by this fixed constant,
/// independent of how many slots are in use that day.
pub const MEAL_LIMIT_DIVISOR: f64 = 4.0;

/// Severity tier of a progress percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Below 80% of the limit
    Nominal,
    /// At or above 80% of the limit
    Warning,
    /// At or above the limit
    Critical,
}

impl Severity {
    /// Tier for a clamped progress percentage
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 100.0 {
            Self::Critical
        } else if percent >= 80.0 {
            Self::Warning
        } else {
            Self::Nominal
        }
    }
}

/// Progress of one nutrient against one limit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Progress {
    /// Consumed amount
    pub actual: f64,
    /// Configured limit; zero disables tracking
    pub limit: f64,
    /// Clamped percentage of the limit, 0..=100
    pub percent: f64,
    /// Severity tier of `percent`
    pub severity: Severity,
}

impl Progress {
    /// Evaluate an actual amount against a limit
    #[must_use]
    pub fn evaluate(actual: f64, limit: f64) -> Self {
        let percent = percent_of(actual, limit);
        Self {
            actual,
            limit,
            percent,
            severity: Severity::from_percent(percent),
        }
    }
}

/// Limit progress for the four tracked limit nutrients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DayAssessment {
    /// Calorie progress
    pub calories: Progress,
    /// Fat progress
    pub fat: Progress,
    /// Carbohydrate progress
    pub carbohydrate: Progress,
    /// Protein progress
    pub protein: Progress,
}

/// Percentage of a limit consumed, clamped to 100.
///
/// A non-positive limit yields 0, guarding the divide-by-zero case.
#[must_use]
pub fn percent_of(actual: f64, limit: f64) -> f64 {
    if limit > 0.0 {
        (actual / limit * 100.0).min(100.0)
    } else {
        0.0
    }
}

/// Threshold applied to a single meal slot for a given daily limit
#[must_use]
pub fn meal_threshold(daily_limit: f64) -> f64 {
    daily_limit / MEAL_LIMIT_DIVISOR
}

/// Roll a day's entries up into per-slot and overall nutrient totals.
///
/// Entries referencing foods missing from the catalog are skipped with a
/// warning; they cannot contribute nutrients without a reference portion.
#[must_use]
pub fn summarize(entries: &[LoggedEntry], catalog: &[FoodItem]) -> DailySummary {
    let by_id: HashMap<i64, &FoodItem> = catalog.iter().map(|f| (f.id, f)).collect();

    let mut per_slot: Vec<SlotTotals> = MealSlot::ALL
        .iter()
        .map(|&slot| SlotTotals {
            slot,
            totals: NutrientTotals::default(),
        })
        .collect();
    let mut total = NutrientTotals::default();

    for entry in entries {
        let Some(food) = by_id.get(&entry.food_id) else {
            tracing::warn!(entry_id = entry.id, food_id = entry.food_id, "entry references unknown food; skipped");
            continue;
        };
        let factor = food.portion_factor(entry.grams);
        if let Some(slot_totals) = per_slot.iter_mut().find(|s| s.slot == entry.slot) {
            slot_totals.totals.add_scaled(food, factor);
        }
        total.add_scaled(food, factor);
    }

    DailySummary { per_slot, total }
}

/// Evaluate a day's totals against the configured daily limits
#[must_use]
pub fn assess_day(total: &NutrientTotals, limits: &DailyLimits) -> DayAssessment {
    DayAssessment {
        calories: Progress::evaluate(total.calories, limits.calories),
        fat: Progress::evaluate(total.fat, limits.fat),
        carbohydrate: Progress::evaluate(total.carbohydrate, limits.carbohydrate),
        protein: Progress::evaluate(total.protein, limits.protein),
    }
}

/// Evaluate one slot's totals against the per-meal thresholds
/// (`daily limit / 4`, preserved as a fixed heuristic)
#[must_use]
pub fn assess_slot(totals: &NutrientTotals, limits: &DailyLimits) -> DayAssessment {
    DayAssessment {
        calories: Progress::evaluate(totals.calories, meal_threshold(limits.calories)),
        fat: Progress::evaluate(totals.fat, meal_threshold(limits.fat)),
        carbohydrate: Progress::evaluate(totals.carbohydrate, meal_threshold(limits.carbohydrate)),
        protein: Progress::evaluate(totals.protein, meal_threshold(limits.protein)),
    }
}
