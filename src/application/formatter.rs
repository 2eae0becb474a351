//! # Response Formatter
//!
//! Turns matched rows into the plain-text bodies sent back to Telegram.

use chrono::{DateTime, TimeZone};

use crate::domain::records::{ApplicationRecord, MISSING, ReviewHit, text};

/// Sentinel sent when an application has no reviews.
pub const NO_REVIEWS: &str = "No reviews found for this application.";

/// Renders the 13-field summary posted when an inline result is picked.
/// Every line, including the last, ends with a newline.
pub fn format_application_summary(app: &ApplicationRecord) -> String {
    let rating = format_rating(app.rating);
    let fields: [(&str, &str); 13] = [
        ("Title", app.display_name()),
        ("Rating", &rating),
        ("Category", text(&app.category)),
        ("Number of Reviews", text(&app.review_count)),
        ("Size", text(&app.size)),
        ("Installs", text(&app.installs)),
        ("Type", text(&app.kind)),
        ("Price", text(&app.price)),
        ("Content Rating", text(&app.content_rating)),
        ("Genres", text(&app.genres)),
        ("Last Updated", text(&app.last_updated)),
        ("Current Version", text(&app.current_version)),
        ("Android Version", text(&app.android_version)),
    ];

    fields
        .iter()
        .map(|(label, value)| format!("{label}: {value}\n"))
        .collect()
}

/// One-line description shown under the title in the inline result list.
pub fn format_inline_description(app: &ApplicationRecord) -> String {
    format!(
        "Rating: {}, Category: {}, Number of Reviews: {}",
        format_rating(app.rating),
        text(&app.category),
        text(&app.review_count)
    )
}

/// `nan` for a missing rating; whole numbers keep one decimal place (`4.0`).
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        None => MISSING.to_string(),
        Some(r) if r.fract() == 0.0 && r.is_finite() => format!("{r:.1}"),
        Some(r) => r.to_string(),
    }
}

/// Renders review hits as numbered blocks separated by a blank line.
/// The number is the hit's row in the review table plus one, not its position in `hits`.
pub fn format_reviews(hits: &[ReviewHit<'_>]) -> String {
    if hits.is_empty() {
        return NO_REVIEWS.to_string();
    }

    hits.iter()
        .map(|hit| {
            format!(
                "Review {}:\n{}\nSentiment: {}\n",
                hit.row + 1,
                text(&hit.review.translated_review),
                text(&hit.review.sentiment)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `YYYY-MM-DD HH:MM:SS`
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}
