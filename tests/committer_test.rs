// ABOUTME: Entry committer tests: gram normalization, web-food creation, abort-on-failure
// ABOUTME: Uses the in-memory store with injected mid-batch failures

#![allow(clippy::unwrap_used)]

mod common;

use nutrio::assistant::EntryCommitter;
use nutrio_core::models::{
    MealSlot, ProductCandidate, Provenance, QuantityMode, ResolutionCandidate,
};
use nutrio_providers::NutritionStore;

fn catalog_candidate(food_id: i64, quantity: f64, mode: QuantityMode) -> ResolutionCandidate {
    let food = common::catalog()
        .into_iter()
        .find(|f| f.id == food_id)
        .unwrap();
    ResolutionCandidate::from_catalog(food, quantity, mode)
}

#[tokio::test]
async fn serving_counts_normalize_to_grams_before_the_write() {
    common::init_test_logging();
    let store = common::seeded_store();
    let committer = EntryCommitter::new(&store);

    // Two eggs at a 50g portion commit as 100g.
    let candidates = vec![catalog_candidate(1, 2.0, QuantityMode::ServingCount)];
    let outcome = committer
        .commit_candidates(&candidates, common::test_date(), MealSlot::Breakfast)
        .await;

    assert!(outcome.is_complete());
    assert_eq!(outcome.committed.len(), 1);
    assert_eq!(outcome.committed[0].grams, 100.0);
    assert_eq!(outcome.committed[0].slot, MealSlot::Breakfast);
}

#[tokio::test]
async fn gram_weights_pass_through_unchanged() {
    common::init_test_logging();
    let store = common::seeded_store();
    let committer = EntryCommitter::new(&store);

    let candidates = vec![catalog_candidate(2, 80.0, QuantityMode::GramWeight)];
    let outcome = committer
        .commit_candidates(&candidates, common::test_date(), MealSlot::Lunch)
        .await;

    assert!(outcome.is_complete());
    assert_eq!(outcome.committed[0].grams, 80.0);
}

#[tokio::test]
async fn first_failure_aborts_and_keeps_earlier_entries() {
    common::init_test_logging();
    let store = common::seeded_store();
    store.fail_entry_creates_after(1).await;
    let committer = EntryCommitter::new(&store);

    let candidates = vec![
        catalog_candidate(1, 1.0, QuantityMode::ServingCount),
        catalog_candidate(2, 100.0, QuantityMode::GramWeight),
        catalog_candidate(3, 1.0, QuantityMode::ServingCount),
    ];
    let outcome = committer
        .commit_candidates(&candidates, common::test_date(), MealSlot::Lunch)
        .await;

    assert_eq!(outcome.committed.len(), 1);
    let failure = outcome.failure.unwrap();
    assert_eq!(failure.index, 1);
    assert_eq!(failure.name, "pan integral");

    // The third candidate was never attempted; only the first entry persisted.
    let entries = store.list_entries(common::test_date()).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].food_id, 1);
}

#[tokio::test]
async fn web_candidates_create_a_catalog_food_first() {
    common::init_test_logging();
    let store = common::seeded_store();
    let committer = EntryCommitter::new(&store);

    let product = ProductCandidate {
        name: "yogur griego".into(),
        calories: Some(97.0),
        fat: Some(5.0),
        carbohydrate: Some(4.0),
        protein: Some(9.0),
        sodium: Some(35.0),
        base_portion_weight: Some(150.0),
        provenance: Provenance::OpenFoodFacts,
        note: None,
    };
    let candidates = vec![ResolutionCandidate::from_lookup(product)];
    let outcome = committer
        .commit_candidates(&candidates, common::test_date(), MealSlot::Snack)
        .await;

    assert!(outcome.is_complete());
    // Lookup candidates default to one portion of the reported weight.
    assert_eq!(outcome.committed[0].grams, 150.0);

    let foods = store.list_foods().await.unwrap();
    let saved = foods.iter().find(|f| f.name == "yogur griego").unwrap();
    assert_eq!(saved.calories, 97.0);
    assert_eq!(outcome.committed[0].food_id, saved.id);
}

#[tokio::test]
async fn templates_expand_server_side_into_entries() {
    common::init_test_logging();
    let store = common::seeded_store();

    let template = store
        .create_meal_template("desayuno clásico", Some("huevos con pan"))
        .await
        .unwrap();
    for line in common::desayuno_template(template.id).lines {
        store.add_line_to_template(template.id, &line).await.unwrap();
    }

    let committer = EntryCommitter::new(&store);
    let entries = committer
        .commit_template(template.id, common::test_date(), MealSlot::Breakfast)
        .await
        .unwrap();

    assert_eq!(entries.len(), 2);
    // Two eggs (serving count) and 50g of bread (gram weight).
    assert_eq!(entries[0].grams, 100.0);
    assert_eq!(entries[1].grams, 50.0);
}
