use vt_core::lexicon::FeatureWeight;
use vt_core::{AnalysisResult, Article, Classification};

pub fn print_result(result: &AnalysisResult) {
    let badge = match result.classification {
        Classification::Real => "✅",
        Classification::Fake => "🚨",
    };
    println!("{} {} ({}% confidence)", badge, result.classification, result.confidence_score);
    println!();
    println!("{}", result.explanation);

    if !result.linguistic_patterns.is_empty() {
        println!();
        println!("Linguistic patterns:");
        for pattern in &result.linguistic_patterns {
            println!("  - {}", pattern);
        }
    }

    if !result.top_features.is_empty() {
        println!();
        println!("Top features:");
        for feature in &result.top_features {
            println!("  {:<16} {:>3}", feature.word, feature.impact);
        }
    }
}

pub fn print_weights(label: &str, weights: &[FeatureWeight]) {
    println!("{}:", label);
    for weight in weights {
        println!("  {:<16} {:.2}", weight.feature, weight.importance);
    }
}

pub fn print_article(article: &Article) {
    println!("{}", article.title);
    println!();
    println!("{}", article.text);
}
