use async_trait::async_trait;
use std::fmt;

use crate::types::{AnalysisResult, Article};
use crate::Result;

#[async_trait]
pub trait InferenceModel: Send + Sync + fmt::Debug {
    /// Short name used in logs and health reports
    fn name(&self) -> &str;

    /// Classify an article and explain the verdict
    async fn analyze_article(&self, article: &Article) -> Result<AnalysisResult>;
}
