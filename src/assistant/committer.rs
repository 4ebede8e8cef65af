// ABOUTME: Sequential entry committer: persists confirmed candidates one by one
// ABOUTME: Aborts on the first failure, reporting both committed entries and the failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

//! Entry commit
//!
//! A confirmed batch commits strictly in order. Quantities are normalized to
//! grams before the write; web-sourced candidates first create a catalog food
//! from their nutrient snapshot, then log against the returned id. The loop
//! stops at the first failing write; entries already persisted stay, and the
//! outcome reports which candidate failed so the user can retry the rest.

use chrono::NaiveDate;
use tracing::{info, warn};

use nutrio_core::errors::ProviderError;
use nutrio_core::models::{
    CandidateSource, LoggedEntry, MealSlot, NewEntry, ResolutionCandidate,
};
use nutrio_providers::NutritionStore;

/// The candidate at which a commit loop stopped
#[derive(Debug)]
pub struct CommitFailure {
    /// Index into the confirmed batch
    pub index: usize,
    /// Display name of the failed candidate
    pub name: String,
    /// The underlying provider error
    pub error: ProviderError,
}

/// Result of committing a confirmed batch
#[derive(Debug, Default)]
pub struct CommitOutcome {
    /// Entries persisted before the loop stopped, in commit order
    pub committed: Vec<LoggedEntry>,
    /// The failure that stopped the loop, if any
    pub failure: Option<CommitFailure>,
}

impl CommitOutcome {
    /// True when every candidate in the batch was persisted
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Commits confirmed candidates against a nutrition store
pub struct EntryCommitter<'a> {
    store: &'a dyn NutritionStore,
}

impl<'a> EntryCommitter<'a> {
    /// Create a committer over the given store
    #[must_use]
    pub const fn new(store: &'a dyn NutritionStore) -> Self {
        Self { store }
    }

    /// Commit a batch of candidates under one day and slot.
    ///
    /// Strictly sequential; never issues concurrent writes. The first error
    /// aborts the loop without attempting later candidates.
    pub async fn commit_candidates(
        &self,
        candidates: &[ResolutionCandidate],
        date: NaiveDate,
        slot: MealSlot,
    ) -> CommitOutcome {
        let mut outcome = CommitOutcome::default();

        for (index, candidate) in candidates.iter().enumerate() {
            match self.commit_one(candidate, date, slot).await {
                Ok(entry) => {
                    info!(
                        entry_id = entry.id,
                        food_id = entry.food_id,
                        grams = entry.grams,
                        slot = slot.label(),
                        "entry committed"
                    );
                    outcome.committed.push(entry);
                }
                Err(error) => {
                    warn!(index, name = candidate.name(), %error, "commit aborted");
                    outcome.failure = Some(CommitFailure {
                        index,
                        name: candidate.name().to_owned(),
                        error,
                    });
                    break;
                }
            }
        }

        outcome
    }

    /// Commit a meal template; the store expands its lines into entries
    pub async fn commit_template(
        &self,
        template_id: i64,
        date: NaiveDate,
        slot: MealSlot,
    ) -> Result<Vec<LoggedEntry>, ProviderError> {
        let entries = self
            .store
            .create_template_entry(date, slot, template_id)
            .await?;
        info!(
            template_id,
            entries = entries.len(),
            slot = slot.label(),
            "template committed"
        );
        Ok(entries)
    }

    async fn commit_one(
        &self,
        candidate: &ResolutionCandidate,
        date: NaiveDate,
        slot: MealSlot,
    ) -> Result<LoggedEntry, ProviderError> {
        let food_id = match &candidate.source {
            CandidateSource::Catalog { food } => food.id,
            // Save the web product locally first so the entry references a
            // catalog food and future utterances resolve without a lookup.
            CandidateSource::Lookup { product } => {
                self.store.create_food(&product.to_new_food()).await?.id
            }
        };

        self.store
            .create_entry(&NewEntry {
                date,
                slot,
                food_id,
                grams: candidate.grams(),
            })
            .await
    }
}
