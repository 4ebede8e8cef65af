// ABOUTME: REST client for the nutrition store backend (foods, templates, entries, limits)
// ABOUTME: JSON over HTTP with per-call error mapping to ProviderError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

//! REST nutrition store client
//!
//! Thin binding of [`NutritionStore`] over the backend's CRUD endpoints.
//! Each store owns a pooled `reqwest` client built with the configured
//! timeouts, so a hung backend cannot block a commit loop forever. Every
//! call maps transport failures to [`ProviderError::Network`], non-success
//! statuses to [`ProviderError::Api`] (retryable iff 5xx), and undecodable
//! payloads to [`ProviderError::Parse`].

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, ClientBuilder, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use nutrio_core::errors::{ProviderError, ProviderResult};
use nutrio_core::models::{
    DailyLimits, DailySummary, FoodItem, LoggedEntry, MealSlot, MealTemplate, MealTemplateDetail,
    NewEntry, NewFood, TemplateLine,
};

use crate::core::NutritionStore;

const SERVICE: &str = "nutrition-store";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Build a pooled JSON client with the given timeouts
pub(crate) fn build_http_client(
    service: &'static str,
    timeout_secs: u64,
    connect_timeout_secs: u64,
) -> ProviderResult<Client> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .map_err(|e| ProviderError::network(service, e.to_string()))
}

/// Nutrition store endpoint configuration
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Base URL of the backend API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5066/api".to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// REST implementation of [`NutritionStore`]
#[derive(Debug, Clone)]
pub struct RestStore {
    config: RestConfig,
    client: Client,
}

#[derive(Serialize)]
struct CreateTemplateBody<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Serialize)]
struct TemplateEntryBody {
    date: NaiveDate,
    slot: MealSlot,
    template_id: i64,
}

#[derive(Serialize)]
struct UpdateEntryBody {
    grams: f64,
}

impl RestStore {
    /// Create a client for the given endpoint configuration.
    ///
    /// Builds the underlying HTTP client with the configured timeouts; a
    /// client that cannot be constructed reports as a network error.
    pub fn new(config: RestConfig) -> ProviderResult<Self> {
        let client =
            build_http_client(SERVICE, config.timeout_secs, config.connect_timeout_secs)?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    async fn send(request: RequestBuilder, context: &'static str) -> ProviderResult<String> {
        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::network(SERVICE, e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        debug!(context, status = status.as_u16(), "nutrition store call");

        if !status.is_success() {
            return Err(ProviderError::api(SERVICE, status.as_u16(), text));
        }
        Ok(text)
    }

    async fn request_json<T: DeserializeOwned>(
        request: RequestBuilder,
        context: &'static str,
    ) -> ProviderResult<T> {
        let text = Self::send(request, context).await?;
        serde_json::from_str(&text).map_err(|source| ProviderError::Parse {
            service: SERVICE,
            context,
            source,
        })
    }

    async fn request_empty(request: RequestBuilder, context: &'static str) -> ProviderResult<()> {
        Self::send(request, context).await.map(|_| ())
    }
}

#[async_trait]
impl NutritionStore for RestStore {
    async fn list_foods(&self) -> ProviderResult<Vec<FoodItem>> {
        Self::request_json(self.client.get(self.url("/foods")), "list_foods").await
    }

    async fn create_food(&self, food: &NewFood) -> ProviderResult<FoodItem> {
        Self::request_json(
            self.client.post(self.url("/foods")).json(food),
            "create_food",
        )
        .await
    }

    async fn update_food(&self, id: i64, food: &NewFood) -> ProviderResult<FoodItem> {
        Self::request_json(
            self.client
                .put(self.url(&format!("/foods/{id}")))
                .json(food),
            "update_food",
        )
        .await
    }

    async fn delete_food(&self, id: i64) -> ProviderResult<()> {
        Self::request_empty(
            self.client.delete(self.url(&format!("/foods/{id}"))),
            "delete_food",
        )
        .await
    }

    async fn list_meal_templates(&self) -> ProviderResult<Vec<MealTemplate>> {
        Self::request_json(self.client.get(self.url("/meals")), "list_meal_templates").await
    }

    async fn get_meal_template_detail(&self, id: i64) -> ProviderResult<MealTemplateDetail> {
        Self::request_json(
            self.client.get(self.url(&format!("/meals/{id}"))),
            "get_meal_template_detail",
        )
        .await
    }

    async fn create_meal_template(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> ProviderResult<MealTemplate> {
        Self::request_json(
            self.client
                .post(self.url("/meals"))
                .json(&CreateTemplateBody { name, description }),
            "create_meal_template",
        )
        .await
    }

    async fn add_line_to_template(
        &self,
        template_id: i64,
        line: &TemplateLine,
    ) -> ProviderResult<()> {
        Self::request_empty(
            self.client
                .post(self.url(&format!("/meals/{template_id}/lines")))
                .json(line),
            "add_line_to_template",
        )
        .await
    }

    async fn remove_line_from_template(
        &self,
        template_id: i64,
        food_id: i64,
    ) -> ProviderResult<()> {
        Self::request_empty(
            self.client
                .delete(self.url(&format!("/meals/{template_id}/lines/{food_id}"))),
            "remove_line_from_template",
        )
        .await
    }

    async fn create_entry(&self, entry: &NewEntry) -> ProviderResult<LoggedEntry> {
        Self::request_json(
            self.client.post(self.url("/entries")).json(entry),
            "create_entry",
        )
        .await
    }

    async fn create_template_entry(
        &self,
        date: NaiveDate,
        slot: MealSlot,
        template_id: i64,
    ) -> ProviderResult<Vec<LoggedEntry>> {
        Self::request_json(
            self.client
                .post(self.url("/entries/meal"))
                .json(&TemplateEntryBody {
                    date,
                    slot,
                    template_id,
                }),
            "create_template_entry",
        )
        .await
    }

    async fn update_entry(&self, id: i64, grams: f64) -> ProviderResult<LoggedEntry> {
        Self::request_json(
            self.client
                .put(self.url(&format!("/entries/{id}")))
                .json(&UpdateEntryBody { grams }),
            "update_entry",
        )
        .await
    }

    async fn delete_entry(&self, id: i64) -> ProviderResult<()> {
        Self::request_empty(
            self.client.delete(self.url(&format!("/entries/{id}"))),
            "delete_entry",
        )
        .await
    }

    async fn list_entries(&self, date: NaiveDate) -> ProviderResult<Vec<LoggedEntry>> {
        Self::request_json(
            self.client.get(self.url(&format!("/entries/{date}"))),
            "list_entries",
        )
        .await
    }

    async fn summarize(&self, date: NaiveDate) -> ProviderResult<DailySummary> {
        Self::request_json(
            self.client.get(self.url(&format!("/entries/{date}/summary"))),
            "summarize",
        )
        .await
    }

    async fn get_limits(&self) -> ProviderResult<DailyLimits> {
        Self::request_json(self.client.get(self.url("/limits")), "get_limits").await
    }

    async fn update_limits(&self, limits: &DailyLimits) -> ProviderResult<()> {
        Self::request_empty(
            self.client.put(self.url("/limits")).json(limits),
            "update_limits",
        )
        .await
    }
}
