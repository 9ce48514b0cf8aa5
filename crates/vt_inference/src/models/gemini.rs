use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use vt_core::{AnalysisResult, Article, Error, Result};

use crate::{prompt, Config};

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Remote generative model asked for a structured verdict.
pub struct GeminiModel {
    client: Arc<Client>,
    api_key: Option<String>,
    model_name: String,
    base_url: String,
}

impl GeminiModel {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Arc::new(Client::builder().timeout(config.timeout).build()?);
        Ok(Self {
            client,
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            model_name: config.model_name.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_request(article: &Article) -> GenerateRequest {
        GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: prompt::system_instruction(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt::user_prompt(article),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: prompt::response_schema(),
            },
        }
    }
}

impl fmt::Debug for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl super::InferenceModel for GeminiModel {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn analyze_article(&self, article: &Article) -> Result<AnalysisResult> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Inference("No API key configured".to_string()))?;

        let request = Self::build_request(article);
        debug!("Requesting verdict from {}", self.model_name);

        let response = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, self.model_name))
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!(
                "Generative API returned {}: {}",
                status, body
            )));
        }

        let response = response.json::<GenerateResponse>().await?;
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::Inference("Empty response from generative API".to_string()));
        }

        let result: AnalysisResult = serde_json::from_str(&text)?;
        result.validate()
    }
}
