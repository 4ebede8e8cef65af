// ABOUTME: Conversation session state: message transcript and pending confirmation
// ABOUTME: Sessions are explicit values, taken and returned by turn processing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

//! Conversation session state
//!
//! A session is a plain value: the transcript plus at most one pending
//! commit awaiting confirmation. Nothing here touches I/O, so sessions can be
//! serialized, inspected, or replayed in tests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use nutrio_core::models::{MealSlot, MealTemplate, ResolutionCandidate};

/// Who authored a transcript message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The person typing utterances
    User,
    /// The assistant's replies
    Assistant,
}

/// One transcript message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message author
    pub role: Role,
    /// Visible text
    pub text: String,
    /// Structured payload attached to the reply (candidate lists, summaries)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ChatMessage {
    /// A user message
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            data: None,
        }
    }

    /// An assistant reply
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            data: None,
        }
    }

    /// An assistant reply carrying a structured payload
    #[must_use]
    pub fn assistant_with_data(text: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            data: Some(data),
        }
    }
}

/// A resolved batch waiting for the user's yes or no
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingCommit {
    /// Food candidates to log individually
    pub candidates: Vec<ResolutionCandidate>,
    /// Matched meal templates; each expands server-side on commit
    pub templates: Vec<MealTemplate>,
    /// Day the batch will be logged under
    pub date: NaiveDate,
    /// Slot detected from the originating utterance
    pub slot: MealSlot,
}

/// The conversation state carried between turns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatSession {
    /// Full transcript in order
    pub messages: Vec<ChatMessage>,
    /// Batch awaiting confirmation, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<PendingCommit>,
}

impl ChatSession {
    /// Start an empty session
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            pending: None,
        }
    }

    /// Append a user message
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
    }

    /// Append an assistant reply
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(text));
    }

    /// The most recent assistant reply, if any
    #[must_use]
    pub fn last_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant)
            .map(|m| m.text.as_str())
    }
}

/// Whether an utterance confirms the pending batch
#[must_use]
pub fn is_affirmative(input: &str) -> bool {
    matches!(
        input.trim().to_lowercase().as_str(),
        "sí" | "si" | "s" | "ok" | "dale" | "confirmo" | "confirmar" | "yes"
    )
}

/// Whether an utterance rejects the pending batch
#[must_use]
pub fn is_negative(input: &str) -> bool {
    matches!(
        input.trim().to_lowercase().as_str(),
        "no" | "n" | "cancelar" | "cancela" | "nada"
    )
}
