// ABOUTME: End-to-end assistant turns: propose, confirm, reject, and degrade paths
// ABOUTME: Drives the engine against the in-memory store and scripted lookups

#![allow(clippy::unwrap_used, clippy::panic)]

mod common;

use std::sync::Arc;

use nutrio::assistant::Assistant;
use nutrio::ChatSession;
use nutrio_core::models::{MealSlot, ProductCandidate, Provenance};
use nutrio_providers::{MemoryStore, NutritionStore, ScriptedLookup};

fn assistant_over(store: Arc<MemoryStore>, lookup: ScriptedLookup) -> Assistant {
    Assistant::new(store, Arc::new(lookup))
}

#[tokio::test]
async fn a_confirmed_utterance_commits_under_the_detected_slot() {
    common::init_test_logging();
    let store = Arc::new(common::seeded_store());
    let assistant = assistant_over(Arc::clone(&store), ScriptedLookup::with_products(Vec::new()));

    let session = assistant
        .handle_turn(ChatSession::new(), "comí 2 huevos", common::test_date())
        .await;
    let proposal = session.last_reply().unwrap();
    assert!(proposal.contains("huevo"));
    assert!(proposal.contains("almuerzo"));
    assert!(session.pending.is_some());

    let session = assistant
        .handle_turn(session, "sí", common::test_date())
        .await;
    assert!(session.last_reply().unwrap().contains("registré 1"));
    assert!(session.pending.is_none());

    let entries = store.list_entries(common::test_date()).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].slot, MealSlot::Lunch);
    assert_eq!(entries[0].grams, 100.0);
}

#[tokio::test]
async fn a_rejected_proposal_commits_nothing() {
    common::init_test_logging();
    let store = Arc::new(common::seeded_store());
    let assistant = assistant_over(Arc::clone(&store), ScriptedLookup::with_products(Vec::new()));

    let session = assistant
        .handle_turn(ChatSession::new(), "cené pan integral", common::test_date())
        .await;
    assert!(session.pending.is_some());

    let session = assistant
        .handle_turn(session, "no", common::test_date())
        .await;
    assert!(session.pending.is_none());
    assert!(session.last_reply().unwrap().contains("no registré"));

    let entries = store.list_entries(common::test_date()).await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn web_fallback_proposes_and_saves_the_product_on_confirm() {
    common::init_test_logging();
    let store = Arc::new(common::seeded_store());
    let product = ProductCandidate {
        name: "kiwi".into(),
        calories: Some(42.0),
        fat: Some(0.4),
        carbohydrate: Some(10.0),
        protein: Some(0.8),
        sodium: Some(2.0),
        base_portion_weight: Some(70.0),
        provenance: Provenance::Usda,
        note: None,
    };
    let assistant = assistant_over(
        Arc::clone(&store),
        ScriptedLookup::with_products(vec![product]),
    );

    let session = assistant
        .handle_turn(ChatSession::new(), "comí un kiwi", common::test_date())
        .await;
    let proposal = session.last_reply().unwrap();
    assert!(proposal.contains("kiwi"));
    assert!(proposal.contains("USDA"));

    let session = assistant
        .handle_turn(session, "sí", common::test_date())
        .await;
    assert!(session.pending.is_none());

    let foods = store.list_foods().await.unwrap();
    assert!(foods.iter().any(|f| f.name == "kiwi"));
    let entries = store.list_entries(common::test_date()).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].grams, 70.0);
}

#[tokio::test]
async fn no_match_replies_with_guidance_and_no_pending_batch() {
    common::init_test_logging();
    let store = Arc::new(common::seeded_store());
    let assistant = assistant_over(Arc::clone(&store), ScriptedLookup::failing());

    let session = assistant
        .handle_turn(ChatSession::new(), "plato misterioso", common::test_date())
        .await;
    assert!(session.pending.is_none());
    assert!(session.last_reply().unwrap().contains("No pude identificar"));
}

#[tokio::test]
async fn a_new_utterance_replaces_the_pending_batch() {
    common::init_test_logging();
    let store = Arc::new(common::seeded_store());
    let assistant = assistant_over(Arc::clone(&store), ScriptedLookup::with_products(Vec::new()));

    let session = assistant
        .handle_turn(ChatSession::new(), "comí 2 huevos", common::test_date())
        .await;
    let session = assistant
        .handle_turn(session, "mejor cené pan integral", common::test_date())
        .await;

    let pending = session.pending.unwrap();
    assert_eq!(pending.slot, MealSlot::Dinner);
    assert_eq!(pending.candidates.len(), 1);
    assert_eq!(pending.candidates[0].name(), "pan integral");

    // Nothing committed while proposals were being replaced.
    let entries = store.list_entries(common::test_date()).await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn a_mid_batch_failure_reports_partial_progress() {
    common::init_test_logging();
    let store = Arc::new(common::seeded_store());
    store.fail_entry_creates_after(1).await;
    let assistant = assistant_over(Arc::clone(&store), ScriptedLookup::with_products(Vec::new()));

    let session = assistant
        .handle_turn(
            ChatSession::new(),
            "almorcé 1 huevo y 100g de pan integral",
            common::test_date(),
        )
        .await;
    assert!(session.pending.is_some());

    let session = assistant
        .handle_turn(session, "sí", common::test_date())
        .await;
    let reply = session.last_reply().unwrap();
    assert!(reply.contains("Registré 1 de 2"));
    assert!(reply.contains("pan integral"));

    let entries = store.list_entries(common::test_date()).await.unwrap();
    assert_eq!(entries.len(), 1);
}
