// ABOUTME: In-process nutrition store and scripted lookup for tests and offline runs
// ABOUTME: Same contracts as the REST clients, backed by mutex-guarded vectors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

//! In-memory collaborator implementations
//!
//! [`MemoryStore`] keeps foods, templates, entries, and limits behind a
//! mutex and recomputes summaries on every read, matching the REST backend's
//! observable behavior. [`ScriptedLookup`] answers lookups from a fixed
//! candidate list. Both support failure injection so flows that span several
//! writes can be tested mid-sequence.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use nutrio_core::errors::{ProviderError, ProviderResult};
use nutrio_core::models::{
    DailyLimits, DailySummary, FoodItem, LoggedEntry, MealSlot, MealTemplate, MealTemplateDetail,
    NewEntry, NewFood, NutrientTotals, ProductCandidate, TemplateLine,
};

use crate::core::{FoodLookup, NutritionStore};

const SERVICE: &str = "memory-store";

#[derive(Debug, Default)]
struct State {
    foods: Vec<FoodItem>,
    templates: Vec<MealTemplate>,
    entries: Vec<LoggedEntry>,
    limits: DailyLimits,
    next_food_id: i64,
    next_template_id: i64,
    next_entry_id: i64,
    // Remaining successful entry creates before injected failures kick in.
    entry_creates_before_failure: Option<usize>,
}

impl State {
    fn food(&self, id: i64) -> ProviderResult<&FoodItem> {
        self.foods
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| ProviderError::api(SERVICE, 404, format!("food {id} not found")))
    }

    fn template(&self, id: i64) -> ProviderResult<&MealTemplate> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ProviderError::api(SERVICE, 404, format!("template {id} not found")))
    }

    fn insert_entry(&mut self, entry: &NewEntry) -> ProviderResult<LoggedEntry> {
        if let Some(remaining) = self.entry_creates_before_failure {
            if remaining == 0 {
                return Err(ProviderError::api(SERVICE, 500, "injected entry failure"));
            }
            self.entry_creates_before_failure = Some(remaining - 1);
        }
        self.next_entry_id += 1;
        let logged = LoggedEntry {
            id: self.next_entry_id,
            date: entry.date,
            slot: entry.slot,
            food_id: entry.food_id,
            grams: entry.grams,
        };
        self.entries.push(logged.clone());
        Ok(logged)
    }
}

/// In-memory [`NutritionStore`] for tests and offline runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    /// Create an empty store with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a food catalog
    #[must_use]
    pub fn with_catalog(foods: Vec<NewFood>) -> Self {
        let mut state = State::default();
        for food in foods {
            state.next_food_id += 1;
            state.foods.push(food.into_item(state.next_food_id));
        }
        Self {
            state: Mutex::new(state),
        }
    }

    /// Allow `successes` entry creates, then fail every subsequent one
    pub async fn fail_entry_creates_after(&self, successes: usize) {
        self.state.lock().await.entry_creates_before_failure = Some(successes);
    }
}

#[async_trait]
impl NutritionStore for MemoryStore {
    async fn list_foods(&self) -> ProviderResult<Vec<FoodItem>> {
        Ok(self.state.lock().await.foods.clone())
    }

    async fn create_food(&self, food: &NewFood) -> ProviderResult<FoodItem> {
        let mut state = self.state.lock().await;
        state.next_food_id += 1;
        let item = food.clone().into_item(state.next_food_id);
        state.foods.push(item.clone());
        Ok(item)
    }

    async fn update_food(&self, id: i64, food: &NewFood) -> ProviderResult<FoodItem> {
        let mut state = self.state.lock().await;
        let Some(existing) = state.foods.iter_mut().find(|f| f.id == id) else {
            return Err(ProviderError::api(SERVICE, 404, format!("food {id} not found")));
        };
        *existing = food.clone().into_item(id);
        Ok(existing.clone())
    }

    async fn delete_food(&self, id: i64) -> ProviderResult<()> {
        let mut state = self.state.lock().await;
        state.food(id)?;
        state.foods.retain(|f| f.id != id);
        Ok(())
    }

    async fn list_meal_templates(&self) -> ProviderResult<Vec<MealTemplate>> {
        Ok(self.state.lock().await.templates.clone())
    }

    async fn get_meal_template_detail(&self, id: i64) -> ProviderResult<MealTemplateDetail> {
        let state = self.state.lock().await;
        let template = state.template(id)?.clone();

        let mut totals = NutrientTotals::default();
        for line in &template.lines {
            let food = state.food(line.food_id)?;
            let grams = food.grams_of(line.quantity, line.mode);
            totals.add_scaled(food, food.portion_factor(grams));
        }
        Ok(MealTemplateDetail { template, totals })
    }

    async fn create_meal_template(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> ProviderResult<MealTemplate> {
        let mut state = self.state.lock().await;
        state.next_template_id += 1;
        let template = MealTemplate {
            id: state.next_template_id,
            name: name.to_owned(),
            description: description.map(str::to_owned),
            lines: Vec::new(),
        };
        state.templates.push(template.clone());
        Ok(template)
    }

    async fn add_line_to_template(
        &self,
        template_id: i64,
        line: &TemplateLine,
    ) -> ProviderResult<()> {
        let mut state = self.state.lock().await;
        state.food(line.food_id)?;
        let Some(template) = state.templates.iter_mut().find(|t| t.id == template_id) else {
            return Err(ProviderError::api(
                SERVICE,
                404,
                format!("template {template_id} not found"),
            ));
        };
        template.lines.push(line.clone());
        Ok(())
    }

    async fn remove_line_from_template(
        &self,
        template_id: i64,
        food_id: i64,
    ) -> ProviderResult<()> {
        let mut state = self.state.lock().await;
        let Some(template) = state.templates.iter_mut().find(|t| t.id == template_id) else {
            return Err(ProviderError::api(
                SERVICE,
                404,
                format!("template {template_id} not found"),
            ));
        };
        template.lines.retain(|l| l.food_id != food_id);
        Ok(())
    }

    async fn create_entry(&self, entry: &NewEntry) -> ProviderResult<LoggedEntry> {
        let mut state = self.state.lock().await;
        state.food(entry.food_id)?;
        state.insert_entry(entry)
    }

    async fn create_template_entry(
        &self,
        date: NaiveDate,
        slot: MealSlot,
        template_id: i64,
    ) -> ProviderResult<Vec<LoggedEntry>> {
        let mut state = self.state.lock().await;
        let lines = state.template(template_id)?.lines.clone();

        let mut created = Vec::with_capacity(lines.len());
        for line in lines {
            let grams = state
                .food(line.food_id)?
                .grams_of(line.quantity, line.mode);
            created.push(state.insert_entry(&NewEntry {
                date,
                slot,
                food_id: line.food_id,
                grams,
            })?);
        }
        Ok(created)
    }

    async fn update_entry(&self, id: i64, grams: f64) -> ProviderResult<LoggedEntry> {
        let mut state = self.state.lock().await;
        let Some(entry) = state.entries.iter_mut().find(|e| e.id == id) else {
            return Err(ProviderError::api(SERVICE, 404, format!("entry {id} not found")));
        };
        entry.grams = grams;
        Ok(entry.clone())
    }

    async fn delete_entry(&self, id: i64) -> ProviderResult<()> {
        let mut state = self.state.lock().await;
        let before = state.entries.len();
        state.entries.retain(|e| e.id != id);
        if state.entries.len() == before {
            return Err(ProviderError::api(SERVICE, 404, format!("entry {id} not found")));
        }
        Ok(())
    }

    async fn list_entries(&self, date: NaiveDate) -> ProviderResult<Vec<LoggedEntry>> {
        let state = self.state.lock().await;
        Ok(state
            .entries
            .iter()
            .filter(|e| e.date == date)
            .cloned()
            .collect())
    }

    async fn summarize(&self, date: NaiveDate) -> ProviderResult<DailySummary> {
        let state = self.state.lock().await;
        let day: Vec<LoggedEntry> = state
            .entries
            .iter()
            .filter(|e| e.date == date)
            .cloned()
            .collect();
        Ok(nutrio_intelligence::summarize(&day, &state.foods))
    }

    async fn get_limits(&self) -> ProviderResult<DailyLimits> {
        Ok(self.state.lock().await.limits)
    }

    async fn update_limits(&self, limits: &DailyLimits) -> ProviderResult<()> {
        self.state.lock().await.limits = *limits;
        Ok(())
    }
}

/// [`FoodLookup`] that answers from a fixed candidate list
#[derive(Debug, Default)]
pub struct ScriptedLookup {
    products: Vec<ProductCandidate>,
    fail: bool,
}

impl ScriptedLookup {
    /// Lookup that returns the given candidates for every query
    #[must_use]
    pub const fn with_products(products: Vec<ProductCandidate>) -> Self {
        Self {
            products,
            fail: false,
        }
    }

    /// Lookup that fails every call with a network error
    #[must_use]
    pub const fn failing() -> Self {
        Self {
            products: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl FoodLookup for ScriptedLookup {
    async fn lookup(&self, _query: &str) -> ProviderResult<Vec<ProductCandidate>> {
        if self.fail {
            return Err(ProviderError::network("food-lookup", "scripted failure"));
        }
        Ok(self.products.clone())
    }
}
