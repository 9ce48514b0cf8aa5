use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use url::Url;
use vt_core::{Error, Result};

pub mod models;
pub mod prompt;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL_NAME: &str = "gemini-3-flash-preview";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    /// Remote generative model, falling back to the heuristic on any failure
    #[default]
    Gemini,
    /// Offline keyword-weighted scorer
    Heuristic,
    /// Offline sensationalism scorer
    Keyword,
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(ModelKind::Gemini),
            "heuristic" => Ok(ModelKind::Heuristic),
            "keyword" => Ok(ModelKind::Keyword),
            other => Err(Error::InvalidInput(format!(
                "Unknown model: {}. Available models: gemini (default), heuristic, keyword",
                other
            ))),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Gemini => write!(f, "gemini"),
            ModelKind::Heuristic => write!(f, "heuristic"),
            ModelKind::Keyword => write!(f, "keyword"),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub model: ModelKind,
    pub api_key: Option<String>,
    pub model_name: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Rejects base URLs that cannot be requested.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::InvalidInput(format!("Invalid base URL {}: {}", self.base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidInput(format!(
                "Unsupported base URL scheme: {}",
                url.scheme()
            )));
        }
        if self.model_name.trim().is_empty() {
            return Err(Error::InvalidInput("Model name must not be empty".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelKind::default(),
            api_key: None,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub mod prelude {
    pub use super::models::create_model;
    pub use super::{Config, ModelKind};
    pub use vt_core::{AnalysisResult, Article, Classification, Error, InferenceModel, Result};
}

pub use models::create_model;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_kind_parsing() {
        assert_eq!("gemini".parse::<ModelKind>().unwrap(), ModelKind::Gemini);
        assert_eq!("Heuristic".parse::<ModelKind>().unwrap(), ModelKind::Heuristic);
        assert_eq!("keyword".parse::<ModelKind>().unwrap(), ModelKind::Keyword);
        assert!("deepseek".parse::<ModelKind>().is_err());
    }

    #[test]
    fn test_config_validation() {
        assert!(Config::default().validate().is_ok());
        assert!(Config::default().with_base_url("not a url").validate().is_err());
        assert!(Config::default().with_base_url("ftp://example.com").validate().is_err());
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = Config::default().with_api_key("secret-key");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }
}
