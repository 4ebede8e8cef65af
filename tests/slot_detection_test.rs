// ABOUTME: Meal-slot keyword detection tests for the Spanish command surface
// ABOUTME: Definition-order precedence and the Extra default

#![allow(clippy::unwrap_used)]

use nutrio_core::models::MealSlot;
use nutrio_intelligence::detect_slot;

#[test]
fn breakfast_keywords() {
    assert_eq!(detect_slot("desayuné dos tostadas"), MealSlot::Breakfast);
    assert_eq!(detect_slot("el desayuno de hoy"), MealSlot::Breakfast);
    assert_eq!(detect_slot("hoy desayune huevos"), MealSlot::Breakfast);
}

#[test]
fn lunch_keywords_include_comi() {
    assert_eq!(detect_slot("almorcé milanesas"), MealSlot::Lunch);
    assert_eq!(detect_slot("en el almuerzo"), MealSlot::Lunch);
    assert_eq!(detect_slot("comí 2 huevos"), MealSlot::Lunch);
    assert_eq!(detect_slot("comi arroz"), MealSlot::Lunch);
}

#[test]
fn snack_dinner_and_snacks_keywords() {
    assert_eq!(detect_slot("de merienda una manzana"), MealSlot::Snack);
    assert_eq!(detect_slot("cené liviano"), MealSlot::Dinner);
    assert_eq!(detect_slot("para la cena"), MealSlot::Dinner);
    assert_eq!(detect_slot("un snack rápido"), MealSlot::Snacks);
    assert_eq!(detect_slot("colación de media mañana"), MealSlot::Snacks);
}

#[test]
fn detection_is_case_insensitive() {
    assert_eq!(detect_slot("DESAYUNO completo"), MealSlot::Breakfast);
}

#[test]
fn unrecognized_utterances_default_to_extra() {
    assert_eq!(detect_slot("2 manzanas"), MealSlot::Extra);
    assert_eq!(detect_slot(""), MealSlot::Extra);
}

#[test]
fn first_keyword_in_definition_order_wins() {
    // Both breakfast and dinner keywords appear; breakfast is defined first.
    assert_eq!(detect_slot("desayuno o cena, no sé"), MealSlot::Breakfast);
}
