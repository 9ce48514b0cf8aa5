//! Prompt and response schema for the remote model.
//!
//! The instruction pins the remote model to the same keyword tables the
//! offline scorers use, so its explanations line up with the local lexicon.

use serde_json::{json, Value};
use vt_core::lexicon::{feature_names, TOP_FAKE_WORDS, TOP_REAL_WORDS};
use vt_core::types::MAX_TOP_FEATURES;
use vt_core::Article;

pub fn system_instruction() -> String {
    let fake_keywords = feature_names(TOP_FAKE_WORDS).join(", ");
    let real_keywords = feature_names(TOP_REAL_WORDS).join(", ");

    format!(
        "You are the trained logistic regression credibility model (v3.0) behind the Veritas news analyzer.

CONTEXT:
You were trained on a labelled corpus of more than 20,000 real and fake news articles.
You are not a general assistant. You simulate the inference of this specific statistical model.

MODEL PARAMETERS:
- Features are TF-IDF n-grams (1-3) plus hand-built linguistic features.
- Top coefficients for the FAKE class: [{fake_keywords}, automatically, banned, completely].
- Top coefficients for the REAL class: [{real_keywords}, stated, noted, analysis].
- Fake articles in the corpus favour absolutist language (\"will definitely\", \"100% guaranteed\") and vague sourcing (\"insiders\", \"sources say\").
- Real articles favour hedging (\"suggests\", \"likely\") and specific attribution (named officials, named agencies).

INSTRUCTIONS:
1. Classify the input as REAL or FAKE using only these corpus patterns.
2. Write the explanation as a data scientist interpreting the model output.
3. Use terms such as vector space, decision boundary, feature importance, coefficient weights, probability score, cluster distance.
4. Never write \"I think\" or \"As an AI\". Phrase it as \"The model predicts...\", \"Training data suggests...\", \"High TF-IDF weight on...\".
5. Report at most {MAX_TOP_FEATURES} top features, with impact on a 0-100 scale.

A text that sounds professional but makes unverifiable absolute claims (for example \"will automatically\") is a known hard case and must be classified as FAKE."
    )
}

pub fn user_prompt(article: &Article) -> String {
    format!(
        "Input data for inference:\nHeadline: \"{}\"\nBody: \"{}\"\n",
        article.title, article.text
    )
}

/// Structured output schema in the remote service's OpenAPI subset.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "classification": {
                "type": "STRING",
                "enum": ["REAL", "FAKE"]
            },
            "confidenceScore": {
                "type": "INTEGER",
                "description": "Model confidence score (0-100)."
            },
            "explanation": {
                "type": "STRING",
                "description": "Technical explanation referencing model weights and dataset clusters."
            },
            "linguisticPatterns": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Detected linguistic patterns such as absolutist language or vague attribution."
            },
            "topFeatures": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "word": { "type": "STRING" },
                        "impact": { "type": "NUMBER" }
                    },
                    "required": ["word", "impact"]
                },
                "description": "Top n-grams or keywords with the highest coefficients."
            }
        },
        "required": [
            "classification",
            "confidenceScore",
            "explanation",
            "linguisticPatterns",
            "topFeatures"
        ]
    })
}
