// ABOUTME: Meal-slot detection from utterance keywords (Spanish command surface)
// ABOUTME: Fixed keyword table, first match in definition order wins, default Extra
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

use nutrio_core::models::MealSlot;

/// Keyword → slot table, checked in definition order.
///
/// Accented and unaccented spellings are both listed because users type
/// either. "comí" counts as lunch, matching how the product's users speak.
pub const SLOT_KEYWORDS: [(&str, MealSlot); 17] = [
    ("desayuno", MealSlot::Breakfast),
    ("desayuné", MealSlot::Breakfast),
    ("desayune", MealSlot::Breakfast),
    ("almuerzo", MealSlot::Lunch),
    ("almorcé", MealSlot::Lunch),
    ("almorce", MealSlot::Lunch),
    ("almorzé", MealSlot::Lunch),
    ("comí", MealSlot::Lunch),
    ("comi", MealSlot::Lunch),
    ("merienda", MealSlot::Snack),
    ("cené", MealSlot::Dinner),
    ("cene", MealSlot::Dinner),
    ("cena", MealSlot::Dinner),
    ("snack", MealSlot::Snacks),
    ("snacks", MealSlot::Snacks),
    ("colación", MealSlot::Snacks),
    ("colacion", MealSlot::Snacks),
];

/// Detect the meal slot an utterance refers to.
///
/// The first table keyword contained anywhere in the lowercased utterance
/// wins; unrecognized utterances default to [`MealSlot::Extra`].
#[must_use]
pub fn detect_slot(utterance: &str) -> MealSlot {
    let lower = utterance.to_lowercase();
    for (keyword, slot) in SLOT_KEYWORDS {
        if lower.contains(keyword) {
            return slot;
        }
    }
    MealSlot::Extra
}
