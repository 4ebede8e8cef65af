// ABOUTME: Daily nutrient limit configuration, one set of thresholds per user
// ABOUTME: Defaults match the product's starting configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

use serde::{Deserialize, Serialize};

/// Daily nutrient thresholds, globally scoped to the user.
///
/// All values are non-negative; a zero limit disables progress tracking for
/// that nutrient rather than dividing by zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyLimits {
    /// Daily calorie threshold (kcal)
    pub calories: f64,
    /// Daily fat threshold (grams)
    pub fat: f64,
    /// Daily carbohydrate threshold (grams)
    pub carbohydrate: f64,
    /// Daily protein threshold (grams)
    pub protein: f64,
}

impl Default for DailyLimits {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            fat: 65.0,
            carbohydrate: 300.0,
            protein: 150.0,
        }
    }
}
