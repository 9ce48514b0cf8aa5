use std::fmt;

use vt_core::lexicon::{match_weights, TOP_FAKE_WORDS, TOP_REAL_WORDS};
use vt_core::types::rank_features;
use vt_core::{AnalysisResult, Article, Classification, FeatureImpact, Result};

use super::InferenceModel;

const SHOUTING_TITLE_MIN_UNITS: usize = 10;
const SHOUTING_TITLE_PENALTY: f64 = 0.5;
const EXCLAMATION_PENALTY: f64 = 0.3;

/// Vocabulary scorer with extra penalties for sensationalist formatting.
pub struct KeywordModel;

impl fmt::Debug for KeywordModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordModel").finish()
    }
}

impl KeywordModel {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, article: &Article) -> AnalysisResult {
        let text = article.combined_text();
        let mut patterns = Vec::new();
        let mut features = Vec::new();

        let mut fake_score = 0.0;
        for weight in match_weights(&text, TOP_FAKE_WORDS) {
            fake_score += weight.importance;
            features.push(FeatureImpact::from_importance(weight.feature, weight.importance));
        }
        let mut real_score = 0.0;
        for weight in match_weights(&text, TOP_REAL_WORDS) {
            real_score += weight.importance;
            features.push(FeatureImpact::from_importance(weight.feature, weight.importance));
        }

        if is_shouting(&article.title) {
            fake_score += SHOUTING_TITLE_PENALTY;
            patterns.push("Excessive Capitalization in Title".to_string());
        }
        if text.contains("!!!") {
            fake_score += EXCLAMATION_PENALTY;
            patterns.push("Excessive Punctuation (!!!)".to_string());
        }

        let classification = if fake_score > real_score {
            patterns.push("High frequency of sensationalist vocabulary".to_string());
            Classification::Fake
        } else {
            patterns.push("Neutral, objective tone detected".to_string());
            patterns.push("Consistent use of official sourcing language".to_string());
            Classification::Real
        };

        let confidence = (50.0 + 50f64.min((fake_score - real_score).abs() * 20.0))
            .clamp(60.0, 99.0)
            .round() as i64;

        // Quotes the first hit in lexicon order, not the highest ranked one.
        let lead = features.first().map(|f| f.word.as_str());
        let explanation = match classification {
            Classification::Fake => format!(
                "The model flagged this article as potentially FAKE due to the presence of sensationalist keywords (e.g., \"{}\") and a lack of verifiable sourcing language. The linguistic pattern matches clickbait clusters found in the training dataset.",
                lead.unwrap_or("shocking")
            ),
            Classification::Real => format!(
                "This article is classified as REAL. The text exhibits a neutral tone and uses standard reporting terminology (e.g., \"{}\") consistent with verified news sources in the dataset.",
                lead.unwrap_or("reported")
            ),
        };

        if features.is_empty() {
            features.push(FeatureImpact::new("analysis", 10));
        }

        AnalysisResult {
            classification,
            confidence_score: confidence,
            explanation,
            linguistic_patterns: patterns,
            top_features: rank_features(features),
        }
    }
}

impl Default for KeywordModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Length is counted in UTF-16 code units, so astral characters count twice.
fn is_shouting(title: &str) -> bool {
    title.encode_utf16().count() > SHOUTING_TITLE_MIN_UNITS && title.to_uppercase() == title
}

#[async_trait::async_trait]
impl InferenceModel for KeywordModel {
    fn name(&self) -> &str {
        "Keyword"
    }

    async fn analyze_article(&self, article: &Article) -> Result<AnalysisResult> {
        Ok(self.score(article))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vt_core::{sample, SampleKind};

    #[tokio::test]
    async fn test_sensational_article() {
        let model = KeywordModel::new();
        let article = Article::new(
            "SHOCKING SECRET UNCOVERED BY INSIDERS",
            "Breaking!!! The mainstream media won't tell you.",
        );
        let result = model.analyze_article(&article).await.unwrap();

        assert_eq!(result.classification, Classification::Fake);
        assert_eq!(result.confidence_score, 99);
        assert_eq!(
            result.linguistic_patterns,
            vec![
                "Excessive Capitalization in Title",
                "Excessive Punctuation (!!!)",
                "High frequency of sensationalist vocabulary",
            ]
        );
        assert!(result.explanation.contains("\"breaking\""));
        let words: Vec<_> = result.top_features.iter().map(|f| f.word.as_str()).collect();
        assert_eq!(words, vec!["breaking", "shocking", "uncovered", "secret", "mainstream"]);
    }

    #[test]
    fn test_neutral_article_gets_placeholder_feature() {
        let result = KeywordModel::new().score(&sample(SampleKind::Fake));

        assert_eq!(result.classification, Classification::Real);
        assert_eq!(result.confidence_score, 60);
        assert_eq!(result.top_features, vec![FeatureImpact::new("analysis", 10)]);
        assert!(result.explanation.contains("\"reported\""));
        assert_eq!(result.linguistic_patterns.len(), 2);
    }

    #[test]
    fn test_real_vocabulary() {
        let article = Article::new(
            "Department issues statement",
            "Officials reported on Tuesday, according to the official statement.",
        );
        let result = KeywordModel::new().score(&article);

        assert_eq!(result.classification, Classification::Real);
        // 0.82 + 0.75 + 0.68 + 0.60 + 0.58 + 0.52 = 3.95 -> capped at 99
        assert_eq!(result.confidence_score, 99);
        assert!(result.explanation.contains("\"reported\""));
    }

    #[test]
    fn test_short_uppercase_title_is_not_shouting() {
        assert!(!is_shouting("WAR NEWS"));
        assert!(is_shouting("WAR NEWS TODAY"));
        assert!(!is_shouting("War News Today"));
    }

    #[test]
    fn test_shouting_counts_utf16_units() {
        // Six emoji are six chars but twelve UTF-16 units.
        let emoji = "\u{1F6A8}\u{1F6A8}\u{1F6A8}\u{1F6A8}\u{1F6A8}\u{1F6A8}";
        assert_eq!(emoji.chars().count(), 6);
        assert!(is_shouting(emoji));

        let article = Article::new(emoji, "Nothing else here.");
        let result = KeywordModel::new().score(&article);
        assert_eq!(result.classification, Classification::Fake);
        assert_eq!(result.linguistic_patterns[0], "Excessive Capitalization in Title");
    }
}
