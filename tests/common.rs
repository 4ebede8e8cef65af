// ABOUTME: Shared test fixtures: quiet logging init, demo catalog, store builders
// ABOUTME: Included via `mod common;` from each integration test target

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::sync::Once;

use chrono::NaiveDate;

use nutrio_core::models::{FoodItem, MealTemplate, NewFood, QuantityMode, TemplateLine};
use nutrio_providers::MemoryStore;

/// Initialize tracing once for the whole test binary, warnings only
pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// A fixed test date
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
}

/// Egg: 78 kcal per 50g portion
pub fn huevo(id: i64) -> FoodItem {
    FoodItem {
        id,
        name: "huevo".into(),
        calories: 78.0,
        fat: 5.3,
        carbohydrate: 0.6,
        protein: 6.3,
        sodium: 62.0,
        base_portion_weight: 50.0,
    }
}

/// Whole-grain bread: 247 kcal per 100g portion
pub fn pan(id: i64) -> FoodItem {
    FoodItem {
        id,
        name: "pan integral".into(),
        calories: 247.0,
        fat: 3.4,
        carbohydrate: 41.0,
        protein: 13.0,
        sodium: 400.0,
        base_portion_weight: 100.0,
    }
}

/// Chicken breast: 165 kcal per 100g portion
pub fn pollo(id: i64) -> FoodItem {
    FoodItem {
        id,
        name: "pechuga de pollo".into(),
        calories: 165.0,
        fat: 3.6,
        carbohydrate: 0.0,
        protein: 31.0,
        sodium: 74.0,
        base_portion_weight: 100.0,
    }
}

/// The demo catalog used across tests; ids follow insertion order 1..
pub fn catalog() -> Vec<FoodItem> {
    vec![huevo(1), pan(2), pollo(3)]
}

fn strip_id(food: FoodItem) -> NewFood {
    NewFood {
        name: food.name,
        calories: food.calories,
        fat: food.fat,
        carbohydrate: food.carbohydrate,
        protein: food.protein,
        sodium: food.sodium,
        base_portion_weight: food.base_portion_weight,
    }
}

/// An in-memory store seeded with the demo catalog (ids 1, 2, 3)
pub fn seeded_store() -> MemoryStore {
    MemoryStore::with_catalog(catalog().into_iter().map(strip_id).collect())
}

/// A breakfast template: two eggs and 50g of bread
pub fn desayuno_template(id: i64) -> MealTemplate {
    MealTemplate {
        id,
        name: "desayuno clásico".into(),
        description: Some("huevos con pan".into()),
        lines: vec![
            TemplateLine {
                food_id: 1,
                quantity: 2.0,
                mode: QuantityMode::ServingCount,
            },
            TemplateLine {
                food_id: 2,
                quantity: 50.0,
                mode: QuantityMode::GramWeight,
            },
        ],
    }
}
