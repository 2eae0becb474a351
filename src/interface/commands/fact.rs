//! # Fact Command
//!
//! Handles the `/fact` command: relays one random fact verbatim.

use crate::domain::traits::{FactSource, Messenger};
use anyhow::{Context, Result};

pub async fn handle_fact(chat: &dyn Messenger, facts: &dyn FactSource, chat_id: i64) -> Result<()> {
    let fact = facts
        .random_fact()
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to fetch random fact")?;
    chat.send_text(chat_id, &fact, None)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
