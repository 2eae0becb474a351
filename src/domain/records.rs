//! # Records
//!
//! Row types of the two CSV tables the bot reads.
//! Every column is optional: an empty cell deserializes to `None` and renders as `nan`.

use serde::{Deserialize, Deserializer};

/// Placeholder rendered for an empty cell.
pub const MISSING: &str = "nan";

/// One row of the applications table (`googleplaystore.csv`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApplicationRecord {
    #[serde(rename = "App", default)]
    pub name: Option<String>,
    #[serde(rename = "Rating", default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    #[serde(rename = "Category", default)]
    pub category: Option<String>,
    #[serde(rename = "Reviews", default)]
    pub review_count: Option<String>,
    #[serde(rename = "Size", default)]
    pub size: Option<String>,
    #[serde(rename = "Installs", default)]
    pub installs: Option<String>,
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
    #[serde(rename = "Price", default)]
    pub price: Option<String>,
    #[serde(rename = "Content Rating", default)]
    pub content_rating: Option<String>,
    #[serde(rename = "Genres", default)]
    pub genres: Option<String>,
    #[serde(rename = "Last Updated", default)]
    pub last_updated: Option<String>,
    #[serde(rename = "Current Ver", default)]
    pub current_version: Option<String>,
    #[serde(rename = "Android Ver", default)]
    pub android_version: Option<String>,
}

impl ApplicationRecord {
    /// Name as displayed, `nan` when the cell is empty.
    pub fn display_name(&self) -> &str {
        text(&self.name)
    }
}

/// One row of the reviews table (`googleplaystore_user_reviews.csv`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReviewRecord {
    #[serde(rename = "App", default)]
    pub app_name: Option<String>,
    #[serde(rename = "Translated_Review", default)]
    pub translated_review: Option<String>,
    #[serde(rename = "Sentiment", default)]
    pub sentiment: Option<String>,
}

/// A review matched by the query engine, with its 0-based row in the review table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewHit<'a> {
    pub row: usize,
    pub review: &'a ReviewRecord,
}

/// Renders an optional cell.
pub fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING)
}

/// Numeric column reader that maps empty or non-numeric cells to `None`.
/// The source data has rows with shifted columns, which must not fail the whole load.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan()))
}
