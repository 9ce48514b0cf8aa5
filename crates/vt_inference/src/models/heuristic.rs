use std::fmt;

use tracing::debug;
use vt_core::lexicon::{
    count_terms, match_weights, ABSOLUTIST_TERMS, REPORTING_TERMS, TOP_FAKE_WORDS, TOP_REAL_WORDS,
    VAGUE_SOURCE_TERMS,
};
use vt_core::types::rank_features;
use vt_core::{AnalysisResult, Article, Classification, FeatureImpact, Result};

use super::InferenceModel;

const VOCAB_WEIGHT: f64 = 0.8;
const ABSOLUTISM_WEIGHT: f64 = 1.5;
const VAGUE_SOURCE_WEIGHT: f64 = 1.2;
const REPORTING_WEIGHT: f64 = 1.0;

const BASE_CONFIDENCE: f64 = 60.0;
const MAX_CONFIDENCE_BONUS: f64 = 39.0;
const MARGIN_SCALE: f64 = 15.0;

const FAKE_EXPLANATION: &str = "Model Prediction: FAKE (Offline Fallback). The model detected patterns highly correlated with the 'Fake' class in the training corpus, specifically absolutist claims and vague sourcing.";
const REAL_EXPLANATION: &str = "Model Prediction: REAL (Offline Fallback). The article's vector representation aligns with the 'Verified News' cluster, exhibiting standard reporting verbs and hedged assertions.";

/// Keyword-weighted linear scorer used when the remote model is unavailable.
///
/// Vocabulary hits, absolutist terms and vague attributions push towards FAKE;
/// vocabulary hits and standard reporting verbs push towards REAL. Ties resolve
/// to REAL.
pub struct HeuristicModel;

impl fmt::Debug for HeuristicModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeuristicModel").finish()
    }
}

impl HeuristicModel {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, article: &Article) -> AnalysisResult {
        let text = article.combined_text();

        let absolutism = count_terms(&text, ABSOLUTIST_TERMS);
        let vague_sources = count_terms(&text, VAGUE_SOURCE_TERMS);
        let structure = count_terms(&text, REPORTING_TERMS);

        let mut features = Vec::new();
        let mut fake_vocab = 0.0;
        for weight in match_weights(&text, TOP_FAKE_WORDS) {
            fake_vocab += weight.importance;
            features.push(FeatureImpact::from_importance(weight.feature, weight.importance));
        }
        let mut real_vocab = 0.0;
        for weight in match_weights(&text, TOP_REAL_WORDS) {
            real_vocab += weight.importance;
            features.push(FeatureImpact::from_importance(weight.feature, weight.importance));
        }

        let fake_weight = fake_vocab * VOCAB_WEIGHT
            + absolutism as f64 * ABSOLUTISM_WEIGHT
            + vague_sources as f64 * VAGUE_SOURCE_WEIGHT;
        let real_weight = real_vocab * VOCAB_WEIGHT + structure as f64 * REPORTING_WEIGHT;
        debug!(fake_weight, real_weight, absolutism, vague_sources, structure, "heuristic weights");

        let margin = (fake_weight - real_weight).abs();
        let confidence = BASE_CONFIDENCE + MAX_CONFIDENCE_BONUS.min(margin * MARGIN_SCALE);

        let mut patterns = Vec::new();
        let (classification, explanation) = if fake_weight > real_weight {
            if absolutism > 0 {
                patterns.push("Absolutist/Deterministic language".to_string());
            }
            if vague_sources > 0 {
                patterns.push("Vague attribution (e.g., 'sources say')".to_string());
            }
            patterns.push("Vocabulary matches misinformation clusters".to_string());
            (Classification::Fake, FAKE_EXPLANATION)
        } else {
            if structure > 0 {
                patterns.push("Standard journalistic attribution".to_string());
            }
            patterns.push("Conditional/Nuanced phrasing".to_string());
            (Classification::Real, REAL_EXPLANATION)
        };

        if patterns.is_empty() {
            patterns.push("Standard vocabulary distribution".to_string());
        }

        AnalysisResult {
            classification,
            confidence_score: confidence.round() as i64,
            explanation: explanation.to_string(),
            linguistic_patterns: patterns,
            top_features: rank_features(features),
        }
    }
}

impl Default for HeuristicModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InferenceModel for HeuristicModel {
    fn name(&self) -> &str {
        "Heuristic"
    }

    async fn analyze_article(&self, article: &Article) -> Result<AnalysisResult> {
        Ok(self.score(article))
    }
}
