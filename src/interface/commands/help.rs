//! # Help Command
//!
//! Handles the `/help` command.
//! Replies to the triggering message with the main help text.

use crate::domain::traits::Messenger;
use anyhow::Result;

pub async fn handle_help(
    chat: &dyn Messenger,
    chat_id: i64,
    message_id: i32,
    bot_username: Option<&str>,
) -> Result<()> {
    let text = crate::strings::help::main(bot_username);
    chat.send_text(chat_id, &text, Some(message_id))
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
