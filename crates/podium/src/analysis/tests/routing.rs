use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;
use tower::ServiceExt;

use crate::analysis::router::{detail_handler, submit_handler};
use crate::analysis::signals::GrammarIssue;

#[tokio::test]
async fn submit_route_accepts_video_submissions() {
    let (service, _) = build_service();
    let router = router_with(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/analyses")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&submission("rehearsal.mp4")).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert!(payload.get("analysis_id").is_some());
    assert_eq!(payload.get("status"), Some(&Value::from("pending")));
}

#[tokio::test]
async fn submit_handler_rejects_unsupported_formats() {
    let (service, _) = build_service();

    let response = submit_handler::<
        StubMediaExtractor,
        StubTranscriber,
        StubGrammarChecker,
        StubVisualAnalyzer,
        MemoryRepository,
    >(State(service), axum::Json(submission("notes.txt")))
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("unsupported video format"));
}

#[tokio::test]
async fn process_route_returns_the_scored_record() {
    let (service, _) = build_service_with(
        BOUNDARY_TRANSCRIPT,
        Vec::<GrammarIssue>::new(),
        None,
    );
    let record = service
        .submit(submission("rehearsal.mp4"))
        .expect("submission succeeds");
    let router = router_with(service);

    let response = router
        .oneshot(
            axum::http::Request::post(format!(
                "/api/v1/analyses/{}/process",
                record.analysis_id.0
            ))
            .body(axum::body::Body::empty())
            .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("status"), Some(&Value::from("completed")));

    let report = payload.get("report").expect("report present");
    assert_eq!(report.get("fluency_score"), Some(&Value::from(80)));
    assert_eq!(report.get("body_language_score"), Some(&Value::Null));
}

#[tokio::test]
async fn detail_handler_returns_not_found_for_unknown_ids() {
    let (service, _) = build_service();

    let response = detail_handler::<
        StubMediaExtractor,
        StubTranscriber,
        StubGrammarChecker,
        StubVisualAnalyzer,
        MemoryRepository,
    >(
        State(service),
        axum::extract::Path("analysis-missing".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_route_exposes_summaries_newest_first() {
    let (service, _) = build_service();
    service
        .submit(submission("first.mp4"))
        .expect("submission succeeds");
    service
        .submit(submission("second.mp4"))
        .expect("submission succeeds");
    let router = router_with(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/analyses")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let rows = payload.as_array().expect("array payload");
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].get("filename"),
        Some(&Value::from("second.mp4"))
    );
}

#[tokio::test]
async fn progress_route_reports_insufficient_history() {
    let (service, _) = build_service();
    let router = router_with(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/progress")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("has_progress"), Some(&Value::from(false)));
}
