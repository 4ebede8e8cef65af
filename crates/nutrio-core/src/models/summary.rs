// ABOUTME: Nutrient total accumulators and the per-day summary shape
// ABOUTME: Data only; the aggregation engine computes these values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

use serde::{Deserialize, Serialize};

use super::entry::MealSlot;
use super::food::FoodItem;

/// Summed nutrient values across a set of entries
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutrientTotals {
    /// Total calories (kcal)
    pub calories: f64,
    /// Total fat (grams)
    pub fat: f64,
    /// Total carbohydrate (grams)
    pub carbohydrate: f64,
    /// Total protein (grams)
    pub protein: f64,
    /// Total sodium (milligrams)
    pub sodium: f64,
}

impl NutrientTotals {
    /// Accumulate a food's nutrients scaled by a portion factor
    pub fn add_scaled(&mut self, food: &FoodItem, factor: f64) {
        self.calories += food.calories * factor;
        self.fat += food.fat * factor;
        self.carbohydrate += food.carbohydrate * factor;
        self.protein += food.protein * factor;
        self.sodium += food.sodium * factor;
    }

    /// Accumulate another totals value
    pub fn add(&mut self, other: &Self) {
        self.calories += other.calories;
        self.fat += other.fat;
        self.carbohydrate += other.carbohydrate;
        self.protein += other.protein;
        self.sodium += other.sodium;
    }
}

/// Nutrient totals for one meal slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SlotTotals {
    /// The meal slot
    pub slot: MealSlot,
    /// Summed nutrients for entries in this slot
    pub totals: NutrientTotals,
}

/// Per-day nutrient summary: one entry per slot plus the overall total.
///
/// Recomputed on every read; never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DailySummary {
    /// Totals per meal slot, in daily display order; slots without entries
    /// carry zero totals
    pub per_slot: Vec<SlotTotals>,
    /// Totals across the whole day
    pub total: NutrientTotals,
}

impl DailySummary {
    /// Totals for one slot, zero if the slot has no entries
    #[must_use]
    pub fn slot_totals(&self, slot: MealSlot) -> NutrientTotals {
        self.per_slot
            .iter()
            .find(|s| s.slot == slot)
            .map_or_else(NutrientTotals::default, |s| s.totals)
    }
}
