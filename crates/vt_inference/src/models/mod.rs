use std::sync::Arc;

use tracing::info;
use vt_core::Result;

use crate::{Config, ModelKind};

pub mod fallback;
pub mod gemini;
pub mod heuristic;
pub mod keyword;

pub use fallback::FallbackModel;
pub use gemini::GeminiModel;
pub use heuristic::HeuristicModel;
pub use keyword::KeywordModel;
pub use vt_core::InferenceModel;

/// Builds the model selected in `config`.
///
/// The remote model is always wrapped with the heuristic scorer, so a missing
/// key or an unreachable endpoint never turns into a failed analysis.
pub async fn create_model(config: Option<Config>) -> Result<Arc<dyn InferenceModel>> {
    let config = config.unwrap_or_default();
    config.validate()?;

    let model: Arc<dyn InferenceModel> = match config.model {
        ModelKind::Gemini => {
            if config.api_key.is_none() {
                info!("🔑 No API key configured, every request will use the offline heuristic");
            }
            let remote = Arc::new(GeminiModel::new(&config)?);
            Arc::new(FallbackModel::new(remote, Arc::new(HeuristicModel::new())))
        }
        ModelKind::Heuristic => Arc::new(HeuristicModel::new()),
        ModelKind::Keyword => Arc::new(KeywordModel::new()),
    };

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vt_core::{sample, Classification, SampleKind};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_model() {
        let model = create_model(None).await.unwrap();
        assert_eq!(model.name(), "Gemini (fallback: Heuristic)");

        let config = Config {
            model: ModelKind::Keyword,
            ..Config::default()
        };
        let model = create_model(Some(config)).await.unwrap();
        assert_eq!(model.name(), "Keyword");
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let config = Config::default().with_base_url("::");
        assert!(create_model(Some(config)).await.is_err());
    }

    #[tokio::test]
    async fn test_default_model_without_key_uses_heuristic() {
        let model = create_model(None).await.unwrap();
        let result = model.analyze_article(&sample(SampleKind::Fake)).await.unwrap();
        assert_eq!(result.classification, Classification::Fake);
        assert_eq!(result.confidence_score, 99);
    }

    #[tokio::test]
    async fn test_remote_failure_answers_with_heuristic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let config = Config::default()
            .with_api_key("test-key")
            .with_base_url(server.uri());
        let model = create_model(Some(config)).await.unwrap();

        let article = sample(SampleKind::Real);
        let result = model.analyze_article(&article).await.unwrap();
        assert_eq!(result, HeuristicModel::new().score(&article));
        assert_eq!(result.classification, Classification::Real);
        assert_eq!(result.confidence_score, 82);
    }
}
