// ABOUTME: Collaborator traits consumed by the assistant core
// ABOUTME: Nutrition store CRUD contract and the external food lookup contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

//! Core collaborator traits
//!
//! These are abstract contracts; HTTP/JSON is the natural binding (see
//! [`crate::rest`] and [`crate::lookup`]) but tests swap in the in-memory
//! implementations from [`crate::memory`].

use async_trait::async_trait;
use chrono::NaiveDate;

use nutrio_core::errors::ProviderResult;
use nutrio_core::models::{
    DailyLimits, DailySummary, FoodItem, LoggedEntry, MealSlot, MealTemplate, MealTemplateDetail,
    NewEntry, NewFood, ProductCandidate, TemplateLine,
};

/// The persistence collaborator owning foods, templates, entries, and limits.
///
/// All calls are asynchronous I/O that suspends the calling flow; the
/// assistant never issues two writes for the same day and slot concurrently.
#[async_trait]
pub trait NutritionStore: Send + Sync {
    /// List the user's food catalog
    async fn list_foods(&self) -> ProviderResult<Vec<FoodItem>>;

    /// Create a food; the store assigns the id
    async fn create_food(&self, food: &NewFood) -> ProviderResult<FoodItem>;

    /// Replace a food's fields
    async fn update_food(&self, id: i64, food: &NewFood) -> ProviderResult<FoodItem>;

    /// Delete a food
    async fn delete_food(&self, id: i64) -> ProviderResult<()>;

    /// List saved meal templates (lines may be omitted in listings)
    async fn list_meal_templates(&self) -> ProviderResult<Vec<MealTemplate>>;

    /// Fetch one template with its lines and derived nutrient totals
    async fn get_meal_template_detail(&self, id: i64) -> ProviderResult<MealTemplateDetail>;

    /// Create an empty template
    async fn create_meal_template(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> ProviderResult<MealTemplate>;

    /// Append a line to a template
    async fn add_line_to_template(
        &self,
        template_id: i64,
        line: &TemplateLine,
    ) -> ProviderResult<()>;

    /// Remove a food's line from a template
    async fn remove_line_from_template(
        &self,
        template_id: i64,
        food_id: i64,
    ) -> ProviderResult<()>;

    /// Log one entry; the quantity is already normalized to grams
    async fn create_entry(&self, entry: &NewEntry) -> ProviderResult<LoggedEntry>;

    /// Log a whole template under a day and slot; the store expands the
    /// template's lines into individual entries
    async fn create_template_entry(
        &self,
        date: NaiveDate,
        slot: MealSlot,
        template_id: i64,
    ) -> ProviderResult<Vec<LoggedEntry>>;

    /// Replace an entry's gram amount atomically
    async fn update_entry(&self, id: i64, grams: f64) -> ProviderResult<LoggedEntry>;

    /// Delete an entry
    async fn delete_entry(&self, id: i64) -> ProviderResult<()>;

    /// List a day's entries
    async fn list_entries(&self, date: NaiveDate) -> ProviderResult<Vec<LoggedEntry>>;

    /// Server-side daily summary for a day
    async fn summarize(&self, date: NaiveDate) -> ProviderResult<DailySummary>;

    /// Read the configured daily limits
    async fn get_limits(&self) -> ProviderResult<DailyLimits>;

    /// Replace the configured daily limits
    async fn update_limits(&self, limits: &DailyLimits) -> ProviderResult<()>;
}

/// The external lookup collaborator for text the catalog cannot resolve
#[async_trait]
pub trait FoodLookup: Send + Sync {
    /// Look up product candidates for a free-text query.
    ///
    /// An empty list is a valid answer; transport failures are errors here
    /// and degraded to "no match" by the orchestrator, never surfaced raw.
    async fn lookup(&self, query: &str) -> ProviderResult<Vec<ProductCandidate>>;
}
