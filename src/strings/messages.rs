//! # Messages
//!
//! User-facing message templates.

/// Label of the button attached to every inline search result.
pub const SHOW_REVIEWS_BUTTON: &str = "Show 5Reviews";

pub fn welcome(user: &str) -> String {
    format!("Dear {user}, welcome to our robot!")
}
