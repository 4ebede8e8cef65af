// ABOUTME: Meal template model: a named, ordered set of food lines
// ABOUTME: Template nutrient totals are derived by the backend, never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

use serde::{Deserialize, Serialize};

use super::food::QuantityMode;
use super::summary::NutrientTotals;

/// A saved meal: an ordered set of (food, quantity, mode) lines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealTemplate {
    /// Backend-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Optional free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered lines; empty for listing responses that omit detail
    #[serde(default)]
    pub lines: Vec<TemplateLine>,
}

/// One line of a meal template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateLine {
    /// Referenced catalog food
    pub food_id: i64,
    /// Quantity in the given mode
    pub quantity: f64,
    /// Quantity mode for this line
    pub mode: QuantityMode,
}

/// Template detail with backend-derived nutrient totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealTemplateDetail {
    /// The template and its lines
    #[serde(flatten)]
    pub template: MealTemplate,
    /// Derived nutrient totals across all lines
    pub totals: NutrientTotals,
}
