//! Keyword tables standing in for the coefficients of the credibility model.
//!
//! All matching is plain substring containment against
//! [`Article::combined_text`](crate::Article::combined_text), so `"according"`
//! also fires on `"according to"`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureWeight {
    pub feature: &'static str,
    pub importance: f64,
}

const fn weight(feature: &'static str, importance: f64) -> FeatureWeight {
    FeatureWeight { feature, importance }
}

/// Highest weighted terms for the FAKE class.
pub const TOP_FAKE_WORDS: &[FeatureWeight] = &[
    weight("breaking", 0.85),
    weight("shocking", 0.78),
    weight("uncovered", 0.72),
    weight("secret", 0.65),
    weight("mainstream", 0.58),
    weight("government", 0.55),
];

/// Highest weighted terms for the REAL class.
pub const TOP_REAL_WORDS: &[FeatureWeight] = &[
    weight("reported", 0.82),
    weight("official", 0.75),
    weight("statement", 0.68),
    weight("tuesday", 0.60),
    weight("according", 0.58),
    weight("department", 0.52),
];

pub const ABSOLUTIST_TERMS: &[&str] = &[
    "automatically",
    "completely",
    "undeniably",
    "guaranteed",
    "proven",
    "total",
    "mandatory",
    "forever",
    "banned",
];

pub const VAGUE_SOURCE_TERMS: &[&str] = &[
    "sources say",
    "insiders",
    "leaked documents",
    "anonymous official",
    "they want",
    "it is believed",
];

pub const REPORTING_TERMS: &[&str] = &[
    "stated",
    "announced",
    "reported",
    "published",
    "according to",
    "analysis by",
];

/// Weights whose feature occurs in `text`, in table order.
pub fn match_weights<'a>(text: &str, weights: &'a [FeatureWeight]) -> Vec<&'a FeatureWeight> {
    weights.iter().filter(|w| text.contains(w.feature)).collect()
}

/// Number of distinct terms that occur in `text`.
pub fn count_terms(text: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| text.contains(*term)).count()
}

pub fn feature_names(weights: &[FeatureWeight]) -> Vec<&'static str> {
    weights.iter().map(|w| w.feature).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_weights_keeps_table_order() {
        let matched = match_weights("secret breaking news", TOP_FAKE_WORDS);
        let names: Vec<_> = matched.iter().map(|w| w.feature).collect();
        assert_eq!(names, vec!["breaking", "secret"]);
    }

    #[test]
    fn test_count_terms_counts_each_term_once() {
        let text = "insiders told insiders that sources say so";
        assert_eq!(count_terms(text, VAGUE_SOURCE_TERMS), 2);
        assert_eq!(count_terms("", VAGUE_SOURCE_TERMS), 0);
    }

    #[test]
    fn test_substring_matching() {
        assert_eq!(count_terms("totally unrelated", ABSOLUTIST_TERMS), 1);
        assert_eq!(match_weights("according to the agency", TOP_REAL_WORDS).len(), 1);
    }
}
