use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};
use vt_core::{AnalysisResult, Article, Result};

use super::InferenceModel;

/// Tries the primary model and answers from the fallback whenever it fails.
pub struct FallbackModel {
    primary: Arc<dyn InferenceModel>,
    fallback: Arc<dyn InferenceModel>,
    name: String,
}

impl FallbackModel {
    pub fn new(primary: Arc<dyn InferenceModel>, fallback: Arc<dyn InferenceModel>) -> Self {
        let name = format!("{} (fallback: {})", primary.name(), fallback.name());
        Self {
            primary,
            fallback,
            name,
        }
    }
}

impl fmt::Debug for FallbackModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackModel")
            .field("primary", &self.primary)
            .field("fallback", &self.fallback)
            .finish()
    }
}

#[async_trait::async_trait]
impl InferenceModel for FallbackModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn analyze_article(&self, article: &Article) -> Result<AnalysisResult> {
        match self.primary.analyze_article(article).await {
            Ok(result) => {
                info!("🧠 Verdict from {}: {}", self.primary.name(), result.classification);
                Ok(result)
            }
            Err(e) => {
                warn!(
                    "⚠️ {} unavailable or failed, falling back to {}: {}",
                    self.primary.name(),
                    self.fallback.name(),
                    e
                );
                self.fallback.analyze_article(article).await
            }
        }
    }
}
