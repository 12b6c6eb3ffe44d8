//! In-process tests of the HTTP surface

use api::{create_router, AppState};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

fn app() -> Router {
    create_router(Arc::new(RwLock::new(AppState::default())))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn point(x: f64, y: f64) -> Value {
    json!({ "x": x, "y": y, "z": 0.0, "visibility": 1.0 })
}

/// Upright, level, centered skeleton
fn body_frame() -> Value {
    let mut points = vec![point(0.5, 0.5); 33];
    for (index, x, y) in [
        (0, 0.5, 0.2),
        (7, 0.55, 0.18),
        (8, 0.45, 0.18),
        (11, 0.6, 0.3),
        (12, 0.4, 0.3),
        (15, 0.65, 0.45),
        (16, 0.35, 0.45),
        (23, 0.55, 0.6),
        (24, 0.45, 0.6),
    ] {
        points[index] = point(x, y);
    }
    Value::Array(points)
}

/// Face looking at the camera with natural eye opening
fn face_frame() -> Value {
    let mut points = vec![point(0.5, 0.5); 468];
    for (index, x, y) in [
        (133, 0.47, 0.4),
        (362, 0.53, 0.4),
        (159, 0.44, 0.375),
        (145, 0.44, 0.425),
        (386, 0.56, 0.375),
        (374, 0.56, 0.425),
    ] {
        points[index] = point(x, y);
    }
    Value::Array(points)
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/api/v1/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["analyses_served"], 0);
}

#[tokio::test]
async fn test_body_language_scores_track() {
    let frames: Vec<Value> = (0..10).map(|_| body_frame()).collect();
    let (status, body) = post(
        app(),
        "/api/v1/analysis/body-language",
        json!({ "frames": frames }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["analysis_id"].as_str().is_some_and(|id| id.len() == 36));
    assert!(body["analyzed_at"].is_string());

    let report = &body["report"];
    assert_eq!(report["status"], "Analysis Complete");
    assert_eq!(report["assessment"], "GOOD");
    assert_eq!(report["details"]["frames_analyzed"], 2);
}

#[tokio::test]
async fn test_body_language_without_detections() {
    let (status, body) = post(
        app(),
        "/api/v1/analysis/body-language",
        json!({ "frames": vec![Value::Null; 12] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["report"]["status"], "No body detected");
    assert_eq!(body["report"]["assessment"], "UNABLE_TO_ANALYZE");
    assert_eq!(body["report"]["details"], json!({}));
}

#[tokio::test]
async fn test_empty_track_is_unprocessable() {
    let (status, body) = post(
        app(),
        "/api/v1/analysis/body-language",
        json!({ "frames": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_incomplete_landmarks_are_unprocessable() {
    let short = vec![point(0.5, 0.5); 10];
    let (status, _) = post(
        app(),
        "/api/v1/analysis/body-language",
        json!({ "frames": vec![Value::Array(short); 5] }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unsupported_container() {
    let (status, _) = post(
        app(),
        "/api/v1/analysis/eye-contact",
        json!({ "clip_name": "answer.avi", "frames": vec![face_frame(); 5] }),
    )
    .await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_eye_contact_scores_track() {
    let (status, body) = post(
        app(),
        "/api/v1/analysis/eye-contact",
        json!({ "clip_name": "answer.mp4", "frames": vec![face_frame(); 15] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["report"]["assessment"], "EXCELLENT");
    assert_eq!(body["report"]["details"]["frames_analyzed"], 3);
}

#[tokio::test]
async fn test_vocal_confidence() {
    // 4 s of continuous tone at 1 kHz
    let samples: Vec<f32> = (0..4000).map(|i| if i % 2 == 0 { 0.5 } else { -0.5 }).collect();
    let (status, body) = post(
        app(),
        "/api/v1/analysis/vocal-confidence",
        json!({
            "sample_rate": 1000,
            "samples": samples,
            "transcript": "We cut the release time in half by automating every manual step",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["report"]["assessment"], "CONFIDENT");
    assert_eq!(body["report"]["details"]["pause_count"], 0);
}

#[tokio::test]
async fn test_vocal_confidence_blank_transcript() {
    let (status, body) = post(
        app(),
        "/api/v1/analysis/vocal-confidence",
        json!({ "sample_rate": 16000, "samples": [0.0, 0.1], "transcript": " " }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["report"]["assessment"], "UNABLE_TO_ANALYZE");
    assert!(body["report"].get("details").is_none());
}

#[tokio::test]
async fn test_analyses_are_counted() {
    let state = Arc::new(RwLock::new(AppState::default()));
    let (status, _) = post(
        create_router(state.clone()),
        "/api/v1/analysis/body-language",
        json!({ "frames": vec![body_frame(); 5] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.read().await.analyses_served, 1);
}

#[tokio::test]
async fn test_metrics_absent_without_recorder() {
    let request = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
