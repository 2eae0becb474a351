//! # Domain Types
//!
//! Outbound values built by the handlers and handed to the chat transport.

use crate::domain::events::CallbackAction;

/// One entry of an inline query answer.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineResult {
    /// Unique per answer (UUID v4).
    pub id: String,
    pub title: String,
    pub description: String,
    /// Text posted to the chat when the result is picked.
    pub message_text: String,
    /// Follow-up button, if any.
    pub button: Option<InlineButton>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InlineButton {
    pub label: String,
    pub action: CallbackAction,
}
