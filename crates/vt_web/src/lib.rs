use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/analyze", post(handlers::analyze_article))
        .route("/api/health", get(handlers::health))
        .route("/api/lexicon", get(handlers::get_lexicon))
        .route("/api/samples/:kind", get(handlers::get_sample))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Serves the API until the process is stopped.
pub async fn run_server(state: AppState, addr: SocketAddr) -> vt_core::Result<()> {
    let model = state.inference_model.name().to_string();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌐 Listening on http://{} (model: {})", listener.local_addr()?, model);
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::{create_app, run_server, AppState};
    pub use vt_core::{AnalysisResult, Article, Error, Result};
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;
    use vt_inference::models::HeuristicModel;

    fn app() -> Router {
        create_app(AppState::new(Arc::new(HeuristicModel::new())))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn analyze_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_analyze() {
        let response = app()
            .oneshot(analyze_request(
                r#"{"title":"Agency update","text":"The department stated on Tuesday that cases fell."}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["classification"], "REAL");
        assert!(json["confidenceScore"].as_i64().unwrap() >= 60);
        assert!(json["linguisticPatterns"].as_array().unwrap().len() >= 1);
        assert!(json["topFeatures"].is_array());
    }

    #[tokio::test]
    async fn test_analyze_blank_input() {
        let response = app()
            .oneshot(analyze_request(r#"{"title":"  ","text":""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("headline"));
    }

    #[tokio::test]
    async fn test_analyze_malformed_body() {
        let response = app().oneshot(analyze_request("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].is_string());

        let request = Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .body(Body::from("title=x"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("Content-Type"));
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["model"], "Heuristic");
    }

    #[tokio::test]
    async fn test_lexicon() {
        let response = app()
            .oneshot(Request::builder().uri("/api/lexicon").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["fake"][0]["feature"], "breaking");
        assert_eq!(json["real"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_samples() {
        let response = app()
            .oneshot(Request::builder().uri("/api/samples/real").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["title"].as_str().unwrap().starts_with("WHO Report"));

        let response = app()
            .oneshot(Request::builder().uri("/api/samples/satire").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
