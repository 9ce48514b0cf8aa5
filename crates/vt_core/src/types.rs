use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Maximum number of contributing keywords reported with a verdict.
pub const MAX_TOP_FEATURES: usize = 5;

/// A headline and body submitted for analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "content")]
    pub text: String,
}

impl Article {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// Title and body joined by a space and lowercased. Keyword matching runs against this.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.text).to_lowercase()
    }

    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    Real,
    Fake,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Real => write!(f, "REAL"),
            Classification::Fake => write!(f, "FAKE"),
        }
    }
}

/// A keyword that pushed the verdict, with its impact scaled to 0..100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImpact {
    pub word: String,
    #[serde(deserialize_with = "rounded")]
    pub impact: i64,
}

impl FeatureImpact {
    pub fn new(word: impl Into<String>, impact: i64) -> Self {
        Self {
            word: word.into(),
            impact,
        }
    }

    pub fn from_importance(word: impl Into<String>, importance: f64) -> Self {
        Self::new(word, (importance * 100.0).round() as i64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub classification: Classification,
    #[serde(deserialize_with = "rounded")]
    pub confidence_score: i64,
    pub explanation: String,
    pub linguistic_patterns: Vec<String>,
    pub top_features: Vec<FeatureImpact>,
}

impl AnalysisResult {
    /// Checks a result produced outside this crate and trims the feature list.
    pub fn validate(mut self) -> Result<Self> {
        if !(0..=100).contains(&self.confidence_score) {
            return Err(Error::Inference(format!(
                "confidence score out of range: {}",
                self.confidence_score
            )));
        }
        if self.explanation.trim().is_empty() {
            return Err(Error::Inference("empty explanation".to_string()));
        }
        self.top_features.truncate(MAX_TOP_FEATURES);
        Ok(self)
    }
}

/// Accepts any JSON number, rounding fractional values to the nearest integer.
fn rounded<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.round() as i64)
}

/// Sorts features by impact, highest first, keeping insertion order for ties.
pub fn rank_features(mut features: Vec<FeatureImpact>) -> Vec<FeatureImpact> {
    features.sort_by(|a, b| b.impact.cmp(&a.impact));
    features.truncate(MAX_TOP_FEATURES);
    features
}
