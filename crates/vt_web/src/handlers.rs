use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};
use vt_core::lexicon::{TOP_FAKE_WORDS, TOP_REAL_WORDS};
use vt_core::{Article, SampleKind};

use crate::AppState;

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

pub async fn analyze_article(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Article>, JsonRejection>,
) -> Response {
    let Json(article) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(rejection.status(), rejection.body_text()),
    };
    if article.is_blank() {
        return error_response(StatusCode::BAD_REQUEST, "Provide a headline or body text to analyze");
    }

    info!("📰 Analyzing article: {}", article.title);
    match state.inference_model.analyze_article(&article).await {
        Ok(result) => {
            info!(
                "✅ {} ({}%) for: {}",
                result.classification, result.confidence_score, article.title
            );
            Json(result).into_response()
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "model": state.inference_model.name(),
    }))
}

pub async fn get_lexicon() -> impl IntoResponse {
    Json(json!({
        "fake": TOP_FAKE_WORDS,
        "real": TOP_REAL_WORDS,
    }))
}

pub async fn get_sample(Path(kind): Path<String>) -> Response {
    match kind.parse::<SampleKind>() {
        Ok(kind) => Json(vt_core::sample(kind)).into_response(),
        Err(e) => error_response(StatusCode::NOT_FOUND, e.to_string()),
    }
}
