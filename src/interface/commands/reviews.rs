//! # Reviews Button
//!
//! Handles presses of the "Show 5Reviews" button.
//! The formatted reviews go to the presser's private chat, not to the chat holding the button.

use crate::application::dataset::Dataset;
use crate::application::formatter::format_reviews;
use crate::application::query::find_reviews_for_application;
use crate::domain::traits::Messenger;
use anyhow::Result;

pub async fn handle_show_reviews(
    chat: &dyn Messenger,
    dataset: &Dataset,
    user_id: u64,
    app_name: &str,
    limit: usize,
) -> Result<()> {
    let table = dataset.reviews().await;
    let hits = find_reviews_for_application(&table, app_name, limit);
    tracing::info!(
        "{}",
        crate::strings::logs::sending_reviews(app_name, hits.len(), user_id)
    );

    chat.send_private(user_id, &format_reviews(&hits))
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
