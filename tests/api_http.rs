// tests/api_http.rs
// HTTP round-trips against the router, no real socket.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot` (tower 0.5 with features=["util"])

use social_trend_analyzer::{create_router, AnalyzerConfig, AppState, TrendAnalyzer};

fn test_app() -> Router {
    let state = AppState {
        analyzer: Arc::new(TrendAnalyzer::new(&AnalyzerConfig::default())),
    };
    create_router(state)
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let app = test_app();
    let resp = app.oneshot(get_req("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn ingest_then_rank_round_trip() {
    let app = test_app();

    let resp = app
        .clone()
        .oneshot(post_json(
            "/posts",
            r#"{"text":"I love the sunny weather today","source":"feed","ts_unix":1000}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let v = body_json(resp).await;
    assert_eq!(v["sentiment"], "Positive");
    assert_eq!(v["tokens_count"], 4);

    let resp = app
        .clone()
        .oneshot(post_json(
            "/posts/batch",
            r#"[{"text":"Sunny days make everyone happy","ts_unix":2000}]"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(get_req("/trends?min_mentions=2"))
        .await
        .unwrap();
    let v = body_json(resp).await;
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["word"], "sunny");
    assert_eq!(arr[0]["mentions"], 2);
}

#[tokio::test]
async fn negative_threshold_is_clamped_to_zero() {
    let app = test_app();
    let _ = app
        .clone()
        .oneshot(post_json("/posts", r#"{"text":"just one quiet word"}"#))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(get_req("/trends?min_mentions=-5"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let clamped = body_json(resp).await;

    let resp = app.oneshot(get_req("/trends?min_mentions=0")).await.unwrap();
    let zero = body_json(resp).await;
    assert_eq!(clamped, zero);
}

#[tokio::test]
async fn wordcloud_exposes_frequency_projection() {
    let app = test_app();
    let _ = app
        .clone()
        .oneshot(post_json(
            "/posts",
            r#"{"text":"rust rust everywhere","ts_unix":10}"#,
        ))
        .await
        .unwrap();

    let resp = app.oneshot(get_req("/wordcloud")).await.unwrap();
    let v = body_json(resp).await;
    assert_eq!(v["rust"], 2);
    assert_eq!(v["everywhere"], 1);
}

#[tokio::test]
async fn posts_endpoint_returns_the_log() {
    let app = test_app();
    let _ = app
        .clone()
        .oneshot(post_json(
            "/posts",
            r#"{"text":"hello trends","source":"cli","ts_unix":42}"#,
        ))
        .await
        .unwrap();

    let resp = app.oneshot(get_req("/posts")).await.unwrap();
    let v = body_json(resp).await;
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["text"], "hello trends");
    assert_eq!(arr[0]["source"], "cli");
    assert_eq!(arr[0]["sentiment"], "Neutral");
}
