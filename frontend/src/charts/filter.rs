//! Label-based record filtering.
//!
//! Aggregation buckets for games with no usable metadata arrive under a
//! grab-bag of placeholder names ("Other", "N/A", "Unknown", ...). Charts
//! never show those buckets, so every category-style builder runs its
//! records through [`filter_unwanted`] before slicing.

use shared::{CategoryCount, CategoryRating, GameEntry};

/// Placeholder category names excluded from every chart.
pub const STOPLIST: &[&str] = &[
    "other",
    "null",
    "",
    "undefined",
    "none",
    "n/a",
    "unknown",
    "not specified",
    "not available",
    "various",
    "misc",
    "miscellaneous",
    "tbd",
    "tba",
    "to be announced",
    "to be determined",
    "missing",
];

/// A record carrying a category label. Missing labels count as unwanted.
pub trait Labeled {
    fn label(&self) -> Option<&str>;

    fn label_text(&self) -> String {
        self.label().unwrap_or_default().to_string()
    }
}

impl Labeled for CategoryCount {
    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Labeled for CategoryRating {
    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Labeled for GameEntry {
    fn label(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// True when the label, lowercased and trimmed, is a stoplist placeholder.
pub fn is_unwanted(label: &str) -> bool {
    let normalized = label.trim().to_lowercase();
    STOPLIST.contains(&normalized.as_str())
}

/// Drops records whose label is missing or a placeholder. Order preserved.
pub fn filter_unwanted<T: Labeled + Clone>(records: &[T]) -> Vec<T> {
    records
        .iter()
        .filter(|r| r.label().map(|l| !is_unwanted(l)).unwrap_or(false))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cat(label: Option<&str>, count: f64) -> CategoryCount {
        CategoryCount {
            label: label.map(String::from),
            count,
        }
    }

    #[test]
    fn test_stoplist_terms_excluded_case_and_whitespace_insensitively() {
        let input = vec![
            cat(Some("PC"), 5.0),
            cat(Some("Other"), 2.0),
            cat(Some(""), 1.0),
            cat(Some("  N/A  "), 9.0),
        ];
        let out = filter_unwanted(&input);
        assert_eq!(out, vec![cat(Some("PC"), 5.0)]);
    }

    #[test]
    fn test_records_missing_label_are_dropped() {
        let input = vec![cat(None, 4.0), cat(Some("Switch"), 1.0)];
        let out = filter_unwanted(&input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label.as_deref(), Some("Switch"));
    }

    #[test]
    fn test_relative_order_preserved() {
        let input = vec![
            cat(Some("PS5"), 10.0),
            cat(Some("Unknown"), 4.0),
            cat(Some("PC"), 7.0),
            cat(Some("Xbox"), 3.0),
        ];
        let out = filter_unwanted(&input);
        let labels: Vec<_> = out.iter().map(|c| c.label_text()).collect();
        assert_eq!(labels, vec!["PS5", "PC", "Xbox"]);
    }

    #[test]
    fn test_every_stoplist_term_is_unwanted() {
        for term in STOPLIST {
            assert!(is_unwanted(term), "{:?} should be unwanted", term);
            assert!(is_unwanted(&term.to_uppercase()));
        }
        assert!(!is_unwanted("PC"));
    }
}
