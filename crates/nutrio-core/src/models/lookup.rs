// ABOUTME: Externally looked-up product candidates and their provenance tags
// ABOUTME: Trust tiers for nutrient data sourced outside the user's catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

use serde::{Deserialize, Serialize};

use super::food::{NewFood, DEFAULT_PORTION_WEIGHT};

/// Trust tier of externally sourced nutrient data
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Verified Open Food Facts record
    OpenFoodFacts,
    /// Verified USDA record
    Usda,
    /// Entry from a common composition database
    CommonDatabase,
    /// Rough estimate; unknown tags also land here
    #[default]
    #[serde(other)]
    Estimated,
}

impl Provenance {
    /// Display label shown next to web-sourced products
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OpenFoodFacts => "Open Food Facts",
            Self::Usda => "USDA",
            Self::CommonDatabase => "Base de datos",
            Self::Estimated => "Estimado",
        }
    }
}

/// A product returned by the external lookup collaborator.
///
/// Nutrient fields are estimates and may be absent; commit treats missing
/// values as zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductCandidate {
    /// Product name as reported by the lookup source
    pub name: String,
    /// Estimated calories per portion (kcal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Estimated fat per portion (grams)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    /// Estimated carbohydrate per portion (grams)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbohydrate: Option<f64>,
    /// Estimated protein per portion (grams)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Estimated sodium per portion (milligrams)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    /// Reference portion weight in grams, when the source reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_portion_weight: Option<f64>,
    /// Trust tier of this record
    #[serde(default)]
    pub provenance: Provenance,
    /// Caveat text attached by the lookup source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ProductCandidate {
    /// Portion weight to use when logging this product
    #[must_use]
    pub fn portion_weight(&self) -> f64 {
        match self.base_portion_weight {
            Some(w) if w > 0.0 => w,
            _ => DEFAULT_PORTION_WEIGHT,
        }
    }

    /// Build a catalog food payload from this nutrient snapshot.
    ///
    /// Saving the product locally lets future utterances resolve it without
    /// another web lookup.
    #[must_use]
    pub fn to_new_food(&self) -> NewFood {
        NewFood {
            name: self.name.clone(),
            calories: self.calories.unwrap_or(0.0),
            fat: self.fat.unwrap_or(0.0),
            carbohydrate: self.carbohydrate.unwrap_or(0.0),
            protein: self.protein.unwrap_or(0.0),
            sodium: self.sodium.unwrap_or(0.0),
            base_portion_weight: self.portion_weight(),
        }
    }
}
