//! # Query Engine
//!
//! Linear filters over the in-memory tables.

use crate::domain::records::{ApplicationRecord, ReviewHit, ReviewRecord};

/// Number of reviews shown per application.
pub const DEFAULT_REVIEW_LIMIT: usize = 5;

/// Applications whose name contains `query`, ignoring case. Rows without a name never match.
/// Table order is preserved and nothing is truncated.
pub fn find_applications_by_name_substring<'a>(
    table: &'a [ApplicationRecord],
    query: &str,
) -> Vec<&'a ApplicationRecord> {
    let needle = query.to_lowercase();
    table
        .iter()
        .filter(|app| {
            app.name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .collect()
}

/// The first `limit` reviews whose application name equals `app_name` exactly.
pub fn find_reviews_for_application<'a>(
    table: &'a [ReviewRecord],
    app_name: &str,
    limit: usize,
) -> Vec<ReviewHit<'a>> {
    table
        .iter()
        .enumerate()
        .filter(|(_, review)| review.app_name.as_deref() == Some(app_name))
        .take(limit)
        .map(|(row, review)| ReviewHit { row, review })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: Option<&str>) -> ApplicationRecord {
        ApplicationRecord {
            name: name.map(str::to_string),
            ..Default::default()
        }
    }

    fn review(app: &str, text: &str) -> ReviewRecord {
        ReviewRecord {
            app_name: Some(app.to_string()),
            translated_review: Some(text.to_string()),
            sentiment: Some("Positive".to_string()),
        }
    }

    fn names<'a>(found: &[&'a ApplicationRecord]) -> Vec<&'a str> {
        found.iter().map(|a| a.display_name()).collect()
    }

    #[test]
    fn test_substring_match_ignores_case() {
        let table = vec![app(Some("FooBar")), app(Some("Baz"))];
        let found = find_applications_by_name_substring(&table, "foo");
        assert_eq!(names(&found), vec!["FooBar"]);

        let found = find_applications_by_name_substring(&table, "BA");
        assert_eq!(names(&found), vec!["FooBar", "Baz"]);
    }

    #[test]
    fn test_substring_match_skips_missing_names() {
        let table = vec![app(None), app(Some("Notes")), app(None)];
        let found = find_applications_by_name_substring(&table, "no");
        assert_eq!(names(&found), vec!["Notes"]);
    }

    #[test]
    fn test_substring_match_keeps_duplicates_and_order() {
        let table = vec![
            app(Some("Calculator")),
            app(Some("Weather")),
            app(Some("Calculator")),
            app(Some("Scientific calculator")),
        ];
        let found = find_applications_by_name_substring(&table, "CALC");
        assert_eq!(
            names(&found),
            vec!["Calculator", "Calculator", "Scientific calculator"]
        );
    }

    #[test]
    fn test_substring_match_is_exact_set() {
        let table: Vec<_> = ["Alpha", "alphabet", "Beta", "ALPHA Pro", "Gamma"]
            .into_iter()
            .map(|n| app(Some(n)))
            .collect();
        let found = find_applications_by_name_substring(&table, "aLpHa");
        for record in &found {
            assert!(record.display_name().to_lowercase().contains("alpha"));
        }
        let expected = table
            .iter()
            .filter(|a| a.display_name().to_lowercase().contains("alpha"))
            .count();
        assert_eq!(found.len(), expected);
    }

    #[test]
    fn test_reviews_exact_match_and_limit() {
        let mut table = Vec::new();
        for i in 0..7 {
            table.push(review("FooBar", &format!("review {i}")));
        }
        table.insert(3, review("foobar", "other case"));
        table.insert(0, review("Baz", "other app"));

        let hits = find_reviews_for_application(&table, "FooBar", DEFAULT_REVIEW_LIMIT);
        assert_eq!(hits.len(), 5);
        assert!(
            hits.iter()
                .all(|h| h.review.app_name.as_deref() == Some("FooBar"))
        );
        let rows: Vec<usize> = hits.iter().map(|h| h.row).collect();
        assert_eq!(rows, vec![1, 2, 3, 5, 6]);
    }

    #[test]
    fn test_reviews_none_found() {
        let table = vec![review("Baz", "fine")];
        assert!(find_reviews_for_application(&table, "FooBar", 5).is_empty());
        assert!(find_reviews_for_application(&[], "FooBar", 5).is_empty());
    }

    #[test]
    fn test_reviews_fewer_than_limit() {
        let table = vec![review("FooBar", "a"), review("FooBar", "b")];
        assert_eq!(find_reviews_for_application(&table, "FooBar", 5).len(), 2);
        assert!(find_reviews_for_application(&table, "FooBar", 0).is_empty());
    }
}
