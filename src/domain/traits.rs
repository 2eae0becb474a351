//! # Domain Traits
//!
//! Abstract interfaces for the outbound collaborators (chat transport, fact service).
//! Allows for pluggable implementations in the Infrastructure layer.

use crate::domain::types::InlineResult;
use async_trait::async_trait;

/// Abstract interface for the chat transport (e.g., Telegram)
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a text message to a chat, optionally as a reply
    async fn send_text(&self, chat_id: i64, text: &str, reply_to: Option<i32>)
    -> Result<(), String>;

    /// Answer an inline query with the given results (possibly none)
    async fn answer_inline_query(
        &self,
        query_id: &str,
        results: Vec<InlineResult>,
    ) -> Result<(), String>;

    /// Send a text message directly to a user
    async fn send_private(&self, user_id: u64, text: &str) -> Result<(), String>;

    /// Stop the client-side loading indicator of a pressed button
    async fn acknowledge_callback(&self, callback_id: &str) -> Result<(), String>;
}

/// Abstract interface for the random fact service
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Fetch one random fact as plain text
    async fn random_fact(&self) -> Result<String, String>;
}
