use std::sync::Arc;
use vt_core::InferenceModel;

pub struct AppState {
    pub inference_model: Arc<dyn InferenceModel>,
}

impl AppState {
    pub fn new(inference_model: Arc<dyn InferenceModel>) -> Self {
        Self { inference_model }
    }
}
