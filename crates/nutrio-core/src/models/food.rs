// ABOUTME: Food item model with per-portion nutrient values and quantity modes
// ABOUTME: Serving-count vs gram-weight quantities and the gram normalization rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

use serde::{Deserialize, Serialize};

/// Reference portion weight in grams when a food does not declare one
pub const DEFAULT_PORTION_WEIGHT: f64 = 100.0;

/// How a logged quantity is expressed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuantityMode {
    /// Multiplier of the food's `base_portion_weight`
    ServingCount,
    /// Absolute amount in grams
    GramWeight,
}

/// A food in the user's catalog.
///
/// All nutrient values are defined per `base_portion_weight` grams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    /// Backend-assigned identifier
    pub id: i64,
    /// Display name; uniqueness is not enforced
    pub name: String,
    /// Calories per portion (kcal)
    pub calories: f64,
    /// Fat per portion (grams)
    #[serde(default)]
    pub fat: f64,
    /// Carbohydrate per portion (grams)
    #[serde(default)]
    pub carbohydrate: f64,
    /// Protein per portion (grams)
    #[serde(default)]
    pub protein: f64,
    /// Sodium per portion (milligrams)
    #[serde(default)]
    pub sodium: f64,
    /// Reference portion weight in grams; must be positive
    #[serde(default = "default_portion_weight")]
    pub base_portion_weight: f64,
}

fn default_portion_weight() -> f64 {
    DEFAULT_PORTION_WEIGHT
}

impl FoodItem {
    /// Effective portion weight, guarding against non-positive stored values
    #[must_use]
    pub fn portion_weight(&self) -> f64 {
        if self.base_portion_weight > 0.0 {
            self.base_portion_weight
        } else {
            DEFAULT_PORTION_WEIGHT
        }
    }

    /// Normalize a quantity in the given mode to grams.
    ///
    /// `ServingCount` multiplies by the portion weight; `GramWeight` is
    /// already canonical, so normalization is idempotent.
    #[must_use]
    pub fn grams_of(&self, quantity: f64, mode: QuantityMode) -> f64 {
        match mode {
            QuantityMode::ServingCount => quantity * self.portion_weight(),
            QuantityMode::GramWeight => quantity,
        }
    }

    /// Scaling factor for nutrient values at a given gram amount
    #[must_use]
    pub fn portion_factor(&self, grams: f64) -> f64 {
        grams / self.portion_weight()
    }
}

/// Payload for creating a food; the backend assigns the id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFood {
    /// Display name
    pub name: String,
    /// Calories per portion (kcal)
    pub calories: f64,
    /// Fat per portion (grams)
    pub fat: f64,
    /// Carbohydrate per portion (grams)
    pub carbohydrate: f64,
    /// Protein per portion (grams)
    pub protein: f64,
    /// Sodium per portion (milligrams)
    pub sodium: f64,
    /// Reference portion weight in grams
    pub base_portion_weight: f64,
}

impl NewFood {
    /// Attach a backend-assigned id, producing a catalog item
    #[must_use]
    pub fn into_item(self, id: i64) -> FoodItem {
        FoodItem {
            id,
            name: self.name,
            calories: self.calories,
            fat: self.fat,
            carbohydrate: self.carbohydrate,
            protein: self.protein,
            sodium: self.sodium,
            base_portion_weight: self.base_portion_weight,
        }
    }
}
