use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use podium::analysis::{
    analysis_router, compose_report, AnalysisReport, AnalysisRepository, AnalysisService,
    GrammarChecker, GrammarIssue, MediaExtractor, RawVisualAnalysis, Transcriber, VisualAnalyzer,
    VisualSignals,
};
use podium::error::AppError;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct ReportRequest {
    pub(crate) transcript: String,
    /// Pre-sorted findings from the caller's grammar checker.
    #[serde(default)]
    pub(crate) grammar_issues: Vec<GrammarIssue>,
    /// Raw visual analyzer output; omitted for audio-only submissions.
    #[serde(default)]
    pub(crate) visual_analysis: Option<RawVisualAnalysis>,
}

pub(crate) fn with_analysis_routes<M, T, G, V, R>(
    service: Arc<AnalysisService<M, T, G, V, R>>,
) -> axum::Router
where
    M: MediaExtractor + 'static,
    T: Transcriber + 'static,
    G: GrammarChecker + 'static,
    V: VisualAnalyzer + 'static,
    R: AnalysisRepository + 'static,
{
    analysis_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/reports", axum::routing::post(report_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Stateless scoring endpoint: the caller already ran the extraction
/// collaborators and submits their outputs directly.
pub(crate) async fn report_endpoint(
    Json(payload): Json<ReportRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let ReportRequest {
        transcript,
        grammar_issues,
        visual_analysis,
    } = payload;

    let visual = visual_analysis
        .as_ref()
        .map(VisualSignals::from_raw)
        .transpose()?;

    Ok(Json(compose_report(&transcript, &grammar_issues, visual)))
}
