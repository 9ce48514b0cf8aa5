pub mod error;
pub mod lexicon;
pub mod models;
pub mod samples;
pub mod types;

pub use error::{Error, Result};
pub use models::InferenceModel;
pub use samples::{sample, SampleKind};
pub use types::{AnalysisResult, Article, Classification, FeatureImpact};
