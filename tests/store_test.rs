// ABOUTME: In-memory nutrition store tests: CRUD surfaces, summaries, and limits
// ABOUTME: The memory store mirrors the REST backend's observable behavior

#![allow(clippy::unwrap_used)]

mod common;

use nutrio_core::models::{DailyLimits, MealSlot, NewEntry, NewFood, QuantityMode, TemplateLine};
use nutrio_providers::{NutritionStore, ProviderError};

fn new_food(name: &str, calories: f64, portion: f64) -> NewFood {
    NewFood {
        name: name.into(),
        calories,
        fat: 0.0,
        carbohydrate: 0.0,
        protein: 0.0,
        sodium: 0.0,
        base_portion_weight: portion,
    }
}

#[tokio::test]
async fn foods_update_in_place_and_delete() {
    common::init_test_logging();
    let store = common::seeded_store();

    let updated = store
        .update_food(1, &new_food("huevo grande", 90.0, 60.0))
        .await
        .unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.name, "huevo grande");
    assert_eq!(updated.calories, 90.0);

    store.delete_food(1).await.unwrap();
    let foods = store.list_foods().await.unwrap();
    assert!(foods.iter().all(|f| f.id != 1));

    let missing = store.delete_food(1).await.unwrap_err();
    assert!(matches!(missing, ProviderError::Api { status: 404, .. }));
}

#[tokio::test]
async fn entries_update_and_delete() {
    common::init_test_logging();
    let store = common::seeded_store();

    let entry = store
        .create_entry(&NewEntry {
            date: common::test_date(),
            slot: MealSlot::Lunch,
            food_id: 1,
            grams: 50.0,
        })
        .await
        .unwrap();

    let updated = store.update_entry(entry.id, 75.0).await.unwrap();
    assert_eq!(updated.grams, 75.0);

    store.delete_entry(entry.id).await.unwrap();
    let entries = store.list_entries(common::test_date()).await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn entries_against_unknown_foods_are_rejected() {
    common::init_test_logging();
    let store = common::seeded_store();

    let error = store
        .create_entry(&NewEntry {
            date: common::test_date(),
            slot: MealSlot::Lunch,
            food_id: 999,
            grams: 50.0,
        })
        .await
        .unwrap_err();
    assert!(matches!(error, ProviderError::Api { status: 404, .. }));
}

#[tokio::test]
async fn template_detail_derives_totals_from_its_lines() {
    common::init_test_logging();
    let store = common::seeded_store();

    let template = store
        .create_meal_template("desayuno clásico", None)
        .await
        .unwrap();
    store
        .add_line_to_template(
            template.id,
            &TemplateLine {
                food_id: 1,
                quantity: 2.0,
                mode: QuantityMode::ServingCount,
            },
        )
        .await
        .unwrap();
    store
        .add_line_to_template(
            template.id,
            &TemplateLine {
                food_id: 2,
                quantity: 50.0,
                mode: QuantityMode::GramWeight,
            },
        )
        .await
        .unwrap();

    let detail = store.get_meal_template_detail(template.id).await.unwrap();
    assert_eq!(detail.template.lines.len(), 2);
    // Two eggs (156 kcal) plus half a bread portion (123.5 kcal).
    assert_eq!(detail.totals.calories, 78.0 * 2.0 + 247.0 * 0.5);

    store
        .remove_line_from_template(template.id, 2)
        .await
        .unwrap();
    let detail = store.get_meal_template_detail(template.id).await.unwrap();
    assert_eq!(detail.template.lines.len(), 1);
}

#[tokio::test]
async fn store_summaries_match_the_aggregation_engine() {
    common::init_test_logging();
    let store = common::seeded_store();

    store
        .create_entry(&NewEntry {
            date: common::test_date(),
            slot: MealSlot::Breakfast,
            food_id: 1,
            grams: 100.0,
        })
        .await
        .unwrap();

    let summary = store.summarize(common::test_date()).await.unwrap();
    assert_eq!(summary.total.calories, 156.0);
    assert_eq!(summary.slot_totals(MealSlot::Breakfast).calories, 156.0);
    assert_eq!(summary.slot_totals(MealSlot::Dinner).calories, 0.0);
}

#[tokio::test]
async fn limits_default_and_round_trip() {
    common::init_test_logging();
    let store = common::seeded_store();

    let limits = store.get_limits().await.unwrap();
    assert_eq!(limits, DailyLimits::default());
    assert_eq!(limits.calories, 2000.0);
    assert_eq!(limits.fat, 65.0);
    assert_eq!(limits.carbohydrate, 300.0);
    assert_eq!(limits.protein, 150.0);

    let tighter = DailyLimits {
        calories: 1800.0,
        ..limits
    };
    store.update_limits(&tighter).await.unwrap();
    assert_eq!(store.get_limits().await.unwrap().calories, 1800.0);
}
