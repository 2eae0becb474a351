//! # Start Command
//!
//! Handles the `/start` command: greets the invoking user by name.

use crate::domain::events::Sender;
use crate::domain::traits::Messenger;
use anyhow::Result;

/// Name used when the update carries no sender (e.g. channel posts).
const ANONYMOUS: &str = "friend";

pub async fn handle_start(
    chat: &dyn Messenger,
    chat_id: i64,
    sender: Option<&Sender>,
) -> Result<()> {
    if let Some(user) = sender {
        tracing::debug!("Greeting user {}", user.id);
    }
    let name = sender.map(Sender::display_name).unwrap_or(ANONYMOUS);
    chat.send_text(chat_id, &crate::strings::messages::welcome(name), None)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
