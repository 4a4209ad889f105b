pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::toolkit::handlers;

/// Resume uploads are small, but larger than axum's 2 MB default.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/outreach", post(handlers::handle_outreach))
        .route("/api/v1/ats-resume", post(handlers::handle_ats_resume))
        .route("/api/v1/jobs/extract", post(handlers::handle_extract_jobs))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::ScriptedModel;
    use crate::pipeline::{ChainConfig, Pipeline};
    use crate::ingest::{HttpPageSource, PdfResumeReader};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_reports_model() {
        let state = AppState {
            pipeline: Arc::new(Pipeline::new(
                Arc::new(ScriptedModel::new()),
                ChainConfig::extraction(),
            )),
            pages: Arc::new(HttpPageSource::new().unwrap()),
            resumes: Arc::new(PdfResumeReader),
        };

        let response = build_router(state)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["model"], "llama3-70b-8192");
    }
}
