// ABOUTME: Assistant engine: wires resolution, confirmation, and commit into turns
// ABOUTME: All user-visible text is Spanish; transport errors never reach the transcript
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

//! The conversational meal-logging engine
//!
//! Each turn takes the session, the user's text, and today's date. New
//! utterances resolve to a candidate batch that waits in the session for a
//! yes or no; confirmation commits the batch under the slot detected from
//! the originating utterance. Failures reply with an actionable next step
//! instead of the underlying provider error.

/// Sequential entry committer
pub mod committer;
/// Local-first, web-fallback resolution
pub mod orchestrator;
/// Conversation session state
pub mod session;

pub use committer::{CommitFailure, CommitOutcome, EntryCommitter};
pub use orchestrator::{FallbackOrchestrator, TurnResolution};
pub use session::{ChatMessage, ChatSession, PendingCommit, Role};

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use nutrio_core::formatters::format_nutrient;
use nutrio_core::models::{LoggedEntry, MealSlot, ProductCandidate, ResolutionCandidate};
use nutrio_intelligence::detect_slot;
use nutrio_providers::{FoodLookup, NutritionStore};

use session::{is_affirmative, is_negative};

/// The meal-logging assistant
pub struct Assistant {
    store: Arc<dyn NutritionStore>,
    lookup: Arc<dyn FoodLookup>,
}

impl Assistant {
    /// Create an assistant over the given collaborators
    #[must_use]
    pub fn new(store: Arc<dyn NutritionStore>, lookup: Arc<dyn FoodLookup>) -> Self {
        Self { store, lookup }
    }

    /// Process one turn, returning the updated session.
    ///
    /// When a batch is pending, an affirmative input commits it and a
    /// negative one discards it; anything else drops the pending batch and
    /// resolves as a fresh utterance.
    pub async fn handle_turn(
        &self,
        mut session: ChatSession,
        input: &str,
        today: NaiveDate,
    ) -> ChatSession {
        session.push_user(input);

        if let Some(pending) = session.pending.take() {
            if is_affirmative(input) {
                let reply = self.commit_pending(&pending).await;
                session.push_assistant(reply);
                return session;
            }
            if is_negative(input) {
                session.push_assistant("Entendido, no registré nada.");
                return session;
            }
            debug!("pending batch replaced by a new utterance");
        }

        self.resolve_utterance(&mut session, input, today).await;
        session
    }

    async fn resolve_utterance(&self, session: &mut ChatSession, input: &str, today: NaiveDate) {
        let slot = detect_slot(input);

        let foods = match self.store.list_foods().await {
            Ok(foods) => foods,
            Err(error) => {
                warn!(%error, "failed to load food catalog");
                session.push_assistant(
                    "No pude leer tu catálogo de alimentos. Verificá que el servidor esté \
                     disponible e intentá de nuevo.",
                );
                return;
            }
        };
        let templates = match self.store.list_meal_templates().await {
            Ok(templates) => templates,
            Err(error) => {
                // The food catalog alone still supports resolution.
                warn!(%error, "failed to load meal templates; continuing without them");
                Vec::new()
            }
        };

        let orchestrator = FallbackOrchestrator::new(&*self.lookup);
        match orchestrator.resolve_turn(input, &foods, &templates).await {
            TurnResolution::Local(matches) => {
                let pending = PendingCommit {
                    candidates: matches.foods,
                    templates: matches.templates,
                    date: today,
                    slot,
                };
                let text = propose_local(&pending);
                push_proposal(session, text, &pending);
                session.pending = Some(pending);
            }
            TurnResolution::Web(products) => {
                let text = propose_web(input, &products, slot);
                let pending = PendingCommit {
                    candidates: products
                        .into_iter()
                        .map(ResolutionCandidate::from_lookup)
                        .collect(),
                    templates: Vec::new(),
                    date: today,
                    slot,
                };
                push_proposal(session, text, &pending);
                session.pending = Some(pending);
            }
            TurnResolution::NoMatch => {
                session.push_assistant(
                    "No pude identificar ningún alimento en ese mensaje. Probá con el nombre \
                     del alimento, por ejemplo \"comí 2 huevos\".",
                );
            }
        }
    }

    async fn commit_pending(&self, pending: &PendingCommit) -> String {
        let committer = EntryCommitter::new(&*self.store);
        let batch_size = pending.candidates.len();

        let outcome = committer
            .commit_candidates(&pending.candidates, pending.date, pending.slot)
            .await;
        if let Some(failure) = &outcome.failure {
            return partial_failure_reply(&outcome.committed, batch_size, failure);
        }

        let mut template_entries: Vec<LoggedEntry> = Vec::new();
        for template in &pending.templates {
            match committer
                .commit_template(template.id, pending.date, pending.slot)
                .await
            {
                Ok(entries) => template_entries.extend(entries),
                Err(error) => {
                    warn!(template_id = template.id, %error, "template commit failed");
                    return format!(
                        "Registré {} entrada(s), pero la comida \"{}\" no se pudo guardar. \
                         Intentá registrarla de nuevo en un momento.",
                        outcome.committed.len(),
                        template.name
                    );
                }
            }
        }

        success_reply(pending, outcome.committed.len() + template_entries.len())
    }
}

fn push_proposal(session: &mut ChatSession, text: String, pending: &PendingCommit) {
    let message = serde_json::to_value(pending).map_or_else(
        |_| ChatMessage::assistant(text.clone()),
        |data| ChatMessage::assistant_with_data(text.clone(), data),
    );
    session.messages.push(message);
}

fn propose_local(pending: &PendingCommit) -> String {
    let mut text = format!(
        "Esto es lo que entendí para {}:\n",
        pending.slot.label()
    );
    for candidate in &pending.candidates {
        let _ = writeln!(
            text,
            "• {} — {}",
            candidate.name(),
            candidate.describe_quantity()
        );
    }
    for template in &pending.templates {
        let _ = writeln!(text, "• Comida guardada: {}", template.name);
    }
    text.push_str("¿Lo registro? (sí/no)");
    text
}

fn propose_web(input: &str, products: &[ProductCandidate], slot: MealSlot) -> String {
    let mut text = format!(
        "No encontré \"{input}\" en tu catálogo, pero la búsqueda web sugiere:\n"
    );
    for product in products {
        let calories = product.calories.unwrap_or(0.0);
        let _ = writeln!(
            text,
            "• {} ({}) — {} kcal por porción",
            product.name,
            product.provenance.label(),
            format_nutrient(calories)
        );
        if let Some(note) = &product.note {
            let _ = writeln!(text, "  {note}");
        }
    }
    let _ = write!(
        text,
        "Si confirmo, lo guardo en tu catálogo y lo registro en {}. ¿Lo registro? (sí/no)",
        slot.label()
    );
    text
}

fn success_reply(pending: &PendingCommit, entry_count: usize) -> String {
    let mut text = format!(
        "Listo, registré {} entrada(s) en {}:\n",
        entry_count,
        pending.slot.label()
    );
    for candidate in &pending.candidates {
        let _ = writeln!(
            text,
            "• {} — {}",
            candidate.name(),
            candidate.describe_quantity()
        );
    }
    for template in &pending.templates {
        let _ = writeln!(text, "• Comida guardada: {}", template.name);
    }
    text.trim_end().to_owned()
}

fn partial_failure_reply(
    committed: &[LoggedEntry],
    batch_size: usize,
    failure: &CommitFailure,
) -> String {
    let retry_hint = if failure.error.is_retryable() {
        "Intentá registrarlo de nuevo en un momento."
    } else {
        "Revisá ese alimento antes de volver a intentarlo."
    };
    format!(
        "Registré {} de {} entradas, pero \"{}\" no se pudo guardar. {} Lo ya registrado \
         quedó guardado.",
        committed.len(),
        batch_size,
        failure.name,
        retry_hint
    )
}
