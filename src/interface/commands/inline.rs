//! # Inline Search
//!
//! Answers inline queries with every application whose name contains the query text.
//! Each result carries a button that asks for the application's reviews.

use crate::application::dataset::Dataset;
use crate::application::formatter::{format_application_summary, format_inline_description};
use crate::application::query::find_applications_by_name_substring;
use crate::domain::events::CallbackAction;
use crate::domain::records::ApplicationRecord;
use crate::domain::traits::Messenger;
use crate::domain::types::{InlineButton, InlineResult};
use crate::strings::{logs, messages};
use anyhow::Result;
use uuid::Uuid;

/// Telegram rejects callback payloads longer than this.
pub const MAX_CALLBACK_PAYLOAD_BYTES: usize = 64;

pub async fn handle_inline_query(
    chat: &dyn Messenger,
    dataset: &Dataset,
    query_id: &str,
    text: &str,
) -> Result<()> {
    tracing::info!("{}", logs::inline_query_received(text));

    let results = if text.is_empty() {
        Vec::new()
    } else {
        search(dataset, text).await
    };

    chat.answer_inline_query(query_id, results)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

async fn search(dataset: &Dataset, text: &str) -> Vec<InlineResult> {
    let table = dataset.applications().await;
    if table.is_empty() {
        tracing::error!("{}", logs::NO_DATA_IN_CSV);
        return Vec::new();
    }

    let matches = find_applications_by_name_substring(&table, text);
    tracing::info!("{}", logs::filtered_apps(text, matches.len()));
    if matches.is_empty() {
        tracing::info!("{}", logs::NO_MATCHING_APPS);
    }

    matches.into_iter().map(build_result).collect()
}

/// Builds one inline result with a fresh id.
pub fn build_result(app: &ApplicationRecord) -> InlineResult {
    let name = app.display_name();
    let action = CallbackAction::ShowReviews(name.to_string());
    let button = if action.encode().len() <= MAX_CALLBACK_PAYLOAD_BYTES {
        Some(InlineButton {
            label: messages::SHOW_REVIEWS_BUTTON.to_string(),
            action,
        })
    } else {
        tracing::warn!("{}", logs::callback_payload_too_long(name));
        None
    };

    InlineResult {
        id: Uuid::new_v4().to_string(),
        title: name.to_string(),
        description: format_inline_description(app),
        message_text: format_application_summary(app),
        button,
    }
}
