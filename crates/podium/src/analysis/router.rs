use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::collaborators::{GrammarChecker, MediaExtractor, Transcriber, VisualAnalyzer};
use super::repository::{AnalysisId, AnalysisRepository, RepositoryError};
use super::service::{AnalysisService, AnalysisServiceError, VideoSubmission};

/// Router builder exposing HTTP endpoints for submission, processing, and
/// history.
pub fn analysis_router<M, T, G, V, R>(service: Arc<AnalysisService<M, T, G, V, R>>) -> Router
where
    M: MediaExtractor + 'static,
    T: Transcriber + 'static,
    G: GrammarChecker + 'static,
    V: VisualAnalyzer + 'static,
    R: AnalysisRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/analyses",
            post(submit_handler::<M, T, G, V, R>).get(list_handler::<M, T, G, V, R>),
        )
        .route(
            "/api/v1/analyses/:analysis_id",
            get(detail_handler::<M, T, G, V, R>),
        )
        .route(
            "/api/v1/analyses/:analysis_id/process",
            post(process_handler::<M, T, G, V, R>),
        )
        .route("/api/v1/progress", get(progress_handler::<M, T, G, V, R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<M, T, G, V, R>(
    State(service): State<Arc<AnalysisService<M, T, G, V, R>>>,
    axum::Json(submission): axum::Json<VideoSubmission>,
) -> Response
where
    M: MediaExtractor + 'static,
    T: Transcriber + 'static,
    G: GrammarChecker + 'static,
    V: VisualAnalyzer + 'static,
    R: AnalysisRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(error @ AnalysisServiceError::UnsupportedFormat { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AnalysisServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "analysis already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn process_handler<M, T, G, V, R>(
    State(service): State<Arc<AnalysisService<M, T, G, V, R>>>,
    Path(analysis_id): Path<String>,
) -> Response
where
    M: MediaExtractor + 'static,
    T: Transcriber + 'static,
    G: GrammarChecker + 'static,
    V: VisualAnalyzer + 'static,
    R: AnalysisRepository + 'static,
{
    let id = AnalysisId(analysis_id);
    match service.process(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.detail_view())).into_response(),
        Err(AnalysisServiceError::Repository(RepositoryError::NotFound)) => {
            not_found_response(&id)
        }
        Err(error @ AnalysisServiceError::AlreadyProcessing { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(
            error @ (AnalysisServiceError::Media(_)
            | AnalysisServiceError::Transcription(_)
            | AnalysisServiceError::Grammar(_)
            | AnalysisServiceError::Signal(_)),
        ) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn detail_handler<M, T, G, V, R>(
    State(service): State<Arc<AnalysisService<M, T, G, V, R>>>,
    Path(analysis_id): Path<String>,
) -> Response
where
    M: MediaExtractor + 'static,
    T: Transcriber + 'static,
    G: GrammarChecker + 'static,
    V: VisualAnalyzer + 'static,
    R: AnalysisRepository + 'static,
{
    let id = AnalysisId(analysis_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.detail_view())).into_response(),
        Err(AnalysisServiceError::Repository(RepositoryError::NotFound)) => {
            not_found_response(&id)
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<M, T, G, V, R>(
    State(service): State<Arc<AnalysisService<M, T, G, V, R>>>,
) -> Response
where
    M: MediaExtractor + 'static,
    T: Transcriber + 'static,
    G: GrammarChecker + 'static,
    V: VisualAnalyzer + 'static,
    R: AnalysisRepository + 'static,
{
    match service.list() {
        Ok(records) => {
            let views: Vec<_> = records
                .iter()
                .map(|record| record.summary_view())
                .collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn progress_handler<M, T, G, V, R>(
    State(service): State<Arc<AnalysisService<M, T, G, V, R>>>,
) -> Response
where
    M: MediaExtractor + 'static,
    T: Transcriber + 'static,
    G: GrammarChecker + 'static,
    V: VisualAnalyzer + 'static,
    R: AnalysisRepository + 'static,
{
    match service.progress() {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn not_found_response(id: &AnalysisId) -> Response {
    let payload = json!({
        "analysis_id": id.0,
        "error": "analysis not found",
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}
