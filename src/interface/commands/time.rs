//! # Time Command
//!
//! Handles the `/time` command: replies with the bot's local time.

use crate::application::formatter::format_timestamp;
use crate::domain::traits::Messenger;
use anyhow::Result;
use chrono::{DateTime, Local};

pub async fn handle_time(
    chat: &dyn Messenger,
    chat_id: i64,
    message_id: i32,
    now: DateTime<Local>,
) -> Result<()> {
    chat.send_text(chat_id, &format_timestamp(&now), Some(message_id))
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
