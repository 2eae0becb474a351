//! # Log Lines
//!
//! Operator-facing log messages.

use std::fmt::Display;
use std::path::Path;

pub const STARTING: &str = "Starting playstore-bot...";
pub const CONFIG_PARSE_ERROR: &str = "Failed to parse YAML";
pub const DISPATCHER_STOPPED: &str = "Dispatcher stopped";
pub const NO_DATA_IN_CSV: &str = "No data found in the CSV file.";
pub const NO_MATCHING_APPS: &str = "No matching apps found.";
pub const HANDLER_ERROR: &str = "Error in update handler";

pub fn config_loaded(path: &Path) -> String {
    format!("Loaded configuration from {}", path.display())
}

pub fn missing_token(env: &str) -> String {
    format!("No Telegram token configured: set services.telegram.token or the {env} environment variable")
}

pub fn bot_started(username: &str) -> String {
    format!("Logged in as @{username}")
}

pub fn csv_read_failed(path: &Path, err: &impl Display) -> String {
    format!("Error reading CSV file {}: {err}", path.display())
}

pub fn row_too_long(line: usize, fields: usize, expected: usize) -> String {
    format!("line {line}: expected at most {expected} fields, saw {fields}")
}

pub fn load_task_failed(err: &str) -> String {
    format!("CSV load task failed: {err}")
}

pub fn inline_query_received(query: &str) -> String {
    format!("Received inline query: {query}")
}

pub fn filtered_apps(query: &str, count: usize) -> String {
    format!("Filtered data: {count} application(s) match {query:?}")
}

pub fn inline_results_capped(total: usize, cap: usize) -> String {
    format!("Inline answer truncated from {total} to {cap} results")
}

pub fn callback_payload_too_long(app: &str) -> String {
    format!("Callback payload for {app:?} exceeds 64 bytes; result sent without reviews button")
}

pub fn unknown_callback(callback_id: &str) -> String {
    format!("Ignoring callback {callback_id} with unknown payload")
}

pub fn sending_reviews(app: &str, count: usize, user_id: u64) -> String {
    format!("Sending {count} review(s) of {app:?} to user {user_id}")
}

pub fn event_failed(event: &impl Display, err: &impl Display) -> String {
    format!("Error: {err} on Update {event}")
}

pub fn unhandled_message(chat_id: i64) -> String {
    format!("Ignoring non-command message in chat {chat_id}")
}
