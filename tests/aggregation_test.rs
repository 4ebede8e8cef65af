// ABOUTME: Aggregation engine tests: slot grouping, scaling, limit progress, severity
// ABOUTME: Covers the 300-calorie scaling case, zero limits, and the /4 meal threshold

#![allow(clippy::unwrap_used)]

mod common;

use nutrio_core::models::{DailyLimits, LoggedEntry, MealSlot, QuantityMode};
use nutrio_intelligence::{
    assess_day, assess_slot, meal_threshold, percent_of, summarize, Severity, MEAL_LIMIT_DIVISOR,
};

fn entry(id: i64, slot: MealSlot, food_id: i64, grams: f64) -> LoggedEntry {
    LoggedEntry {
        id,
        date: common::test_date(),
        slot,
        food_id,
        grams,
    }
}

#[test]
fn entries_scale_by_grams_over_portion_weight() {
    // pan integral: 247 kcal per 100g portion; 300g contributes 741 kcal.
    let entries = vec![entry(1, MealSlot::Lunch, 2, 300.0)];
    let summary = summarize(&entries, &common::catalog());

    assert_eq!(summary.total.calories, 741.0);
    assert_eq!(summary.total.carbohydrate, 123.0);

    let lunch = summary.slot_totals(MealSlot::Lunch);
    assert_eq!(lunch.calories, 741.0);
}

#[test]
fn slots_accumulate_independently_and_total_sums_everything() {
    // huevo: 78 kcal per 50g portion; two eggs are 100g.
    let entries = vec![
        entry(1, MealSlot::Breakfast, 1, 100.0),
        entry(2, MealSlot::Breakfast, 2, 50.0),
        entry(3, MealSlot::Dinner, 3, 200.0),
    ];
    let summary = summarize(&entries, &common::catalog());

    let breakfast = summary.slot_totals(MealSlot::Breakfast);
    assert_eq!(breakfast.calories, 78.0 * 2.0 + 247.0 * 0.5);

    let dinner = summary.slot_totals(MealSlot::Dinner);
    assert_eq!(dinner.calories, 330.0);
    assert_eq!(dinner.protein, 62.0);

    assert_eq!(
        summary.total.calories,
        breakfast.calories + dinner.calories
    );

    let lunch = summary.slot_totals(MealSlot::Lunch);
    assert_eq!(lunch.calories, 0.0);
}

#[test]
fn gram_normalization_is_idempotent() {
    let egg = common::huevo(1);
    let grams = egg.grams_of(2.0, QuantityMode::ServingCount);
    assert_eq!(grams, 100.0);
    // Normalizing an already-normalized gram weight changes nothing.
    assert_eq!(egg.grams_of(grams, QuantityMode::GramWeight), grams);
}

#[test]
fn entries_for_unknown_foods_are_skipped() {
    let entries = vec![
        entry(1, MealSlot::Lunch, 999, 100.0),
        entry(2, MealSlot::Lunch, 1, 50.0),
    ];
    let summary = summarize(&entries, &common::catalog());
    assert_eq!(summary.total.calories, 78.0);
}

#[test]
fn every_slot_appears_even_when_empty() {
    let summary = summarize(&[], &common::catalog());
    assert_eq!(summary.per_slot.len(), MealSlot::ALL.len());
    assert!(summary.per_slot.iter().all(|s| s.totals.calories == 0.0));
}

#[test]
fn percent_is_clamped_to_one_hundred() {
    assert_eq!(percent_of(50.0, 200.0), 25.0);
    assert_eq!(percent_of(400.0, 200.0), 100.0);
}

#[test]
fn zero_limit_disables_tracking() {
    assert_eq!(percent_of(500.0, 0.0), 0.0);
    assert_eq!(percent_of(500.0, -10.0), 0.0);
}

#[test]
fn severity_tiers_at_the_documented_boundaries() {
    assert_eq!(Severity::from_percent(79.9), Severity::Nominal);
    assert_eq!(Severity::from_percent(80.0), Severity::Warning);
    assert_eq!(Severity::from_percent(99.9), Severity::Warning);
    assert_eq!(Severity::from_percent(100.0), Severity::Critical);
}

#[test]
fn meal_threshold_divides_the_daily_limit_by_four() {
    assert_eq!(MEAL_LIMIT_DIVISOR, 4.0);
    assert_eq!(meal_threshold(2000.0), 500.0);
    assert_eq!(meal_threshold(0.0), 0.0);
}

#[test]
fn day_assessment_tracks_each_nutrient_against_its_limit() {
    let limits = DailyLimits::default();
    let entries = vec![entry(1, MealSlot::Lunch, 2, 800.0)]; // 1976 kcal
    let summary = summarize(&entries, &common::catalog());

    let assessment = assess_day(&summary.total, &limits);
    assert_eq!(assessment.calories.actual, 1976.0);
    assert!((assessment.calories.percent - 98.8).abs() < 1e-9);
    assert_eq!(assessment.calories.severity, Severity::Warning);
    assert_eq!(assessment.protein.severity, Severity::Nominal);
}

#[test]
fn slot_assessment_uses_the_per_meal_threshold() {
    let limits = DailyLimits::default();
    let entries = vec![entry(1, MealSlot::Lunch, 2, 250.0)]; // 617.5 kcal
    let summary = summarize(&entries, &common::catalog());
    let lunch = summary.slot_totals(MealSlot::Lunch);

    let assessment = assess_slot(&lunch, &limits);
    // 617.5 kcal against the 500 kcal meal threshold clamps to 100%.
    assert_eq!(assessment.calories.percent, 100.0);
    assert_eq!(assessment.calories.severity, Severity::Critical);
}
