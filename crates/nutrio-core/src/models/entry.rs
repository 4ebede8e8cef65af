// ABOUTME: Logged entry model and the fixed meal-slot categories
// ABOUTME: Entries are always stored as gram weights under a day and slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::food::FoodItem;
use crate::formatters::format_number;

/// Fixed daily meal categories used to bucket logged entries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// First meal of the day
    Breakfast,
    /// Midday meal
    Lunch,
    /// Afternoon snack ("merienda")
    Snack,
    /// Evening meal
    Dinner,
    /// Snacks throughout the day
    Snacks,
    /// Anything not tied to a named meal
    Extra,
}

impl MealSlot {
    /// All slots in daily display order
    pub const ALL: [Self; 6] = [
        Self::Breakfast,
        Self::Lunch,
        Self::Snack,
        Self::Dinner,
        Self::Snacks,
        Self::Extra,
    ];

    /// Spanish display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "desayuno",
            Self::Lunch => "almuerzo",
            Self::Snack => "merienda",
            Self::Dinner => "cena",
            Self::Snacks => "snacks",
            Self::Extra => "extra",
        }
    }
}

/// A committed food entry for one day and slot.
///
/// The quantity is always a gram weight; serving counts are converted before
/// commit. Entries belong to the day and slot they were created under and
/// cannot move between slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggedEntry {
    /// Backend-assigned identifier
    pub id: i64,
    /// Calendar day, no time component
    pub date: NaiveDate,
    /// Meal slot the entry belongs to
    pub slot: MealSlot,
    /// Referenced catalog food
    pub food_id: i64,
    /// Quantity in grams
    pub grams: f64,
}

impl LoggedEntry {
    /// Human-readable quantity for this entry.
    ///
    /// Gram amounts within 0.01 of a whole number of portions display as
    /// portions; everything else displays as grams with one decimal.
    #[must_use]
    pub fn describe_quantity(&self, food: &FoodItem) -> String {
        let portions = self.grams / food.portion_weight();
        let whole = portions.round();
        if (portions - whole).abs() < 0.01 {
            let count = whole as i64;
            let suffix = if count == 1 { "porción" } else { "porciones" };
            return format!("{count} {suffix}");
        }
        format!("{}g", format_number(self.grams, 1))
    }
}

/// Payload for creating an entry; the backend assigns the id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEntry {
    /// Calendar day
    pub date: NaiveDate,
    /// Meal slot
    pub slot: MealSlot,
    /// Referenced catalog food
    pub food_id: i64,
    /// Quantity in grams
    pub grams: f64,
}
