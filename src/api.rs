// src/api.rs
//! HTTP surface over the in-memory analyzer: ingestion source, ranking
//! consumer, and the word-frequency projection for visualization.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::engine::TrendAnalyzer;
use crate::postlog::PostRecord;
use crate::sentiment::Sentiment;
use crate::trends::TrendEntry;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<TrendAnalyzer>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/posts", post(ingest_post).get(list_posts))
        .route("/posts/batch", post(ingest_batch))
        .route("/trends", get(trends))
        .route("/wordcloud", get(wordcloud))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Deserialize)]
struct PostReq {
    text: String,
    #[serde(default)]
    source: Option<String>,
    /// Missing timestamp means "now".
    #[serde(default)]
    ts_unix: Option<u64>,
}

#[derive(Serialize)]
struct IngestResp {
    sentiment: Sentiment,
    tokens_count: usize,
}

#[derive(Deserialize)]
struct TrendsQuery {
    /// Signed on purpose: negative values are clamped to 0 (documented
    /// policy), absent means the configured default.
    #[serde(default)]
    min_mentions: Option<i64>,
}

fn resolve_timestamp(ts_unix: Option<u64>) -> DateTime<Utc> {
    match ts_unix {
        Some(s) => Utc
            .timestamp_opt(s as i64, 0)
            .single()
            .unwrap_or_else(Utc::now),
        None => Utc::now(),
    }
}

async fn ingest_post(State(state): State<AppState>, Json(body): Json<PostReq>) -> Json<IngestResp> {
    let ts = resolve_timestamp(body.ts_unix);
    let source = body.source.as_deref().unwrap_or("api");
    let out = state.analyzer.ingest(&body.text, ts, source);
    Json(IngestResp {
        sentiment: out.sentiment,
        tokens_count: out.token_count,
    })
}

async fn ingest_batch(
    State(state): State<AppState>,
    Json(items): Json<Vec<PostReq>>,
) -> Json<Vec<IngestResp>> {
    let results = items
        .into_iter()
        .map(|item| {
            let ts = resolve_timestamp(item.ts_unix);
            let source = item.source.as_deref().unwrap_or("api");
            let out = state.analyzer.ingest(&item.text, ts, source);
            IngestResp {
                sentiment: out.sentiment,
                tokens_count: out.token_count,
            }
        })
        .collect();
    Json(results)
}

async fn trends(
    State(state): State<AppState>,
    Query(q): Query<TrendsQuery>,
) -> Json<Vec<TrendEntry>> {
    let ranked = match q.min_mentions {
        Some(m) => state.analyzer.trending(m.max(0) as u64),
        None => state.analyzer.trending_default(),
    };
    Json(ranked)
}

async fn list_posts(State(state): State<AppState>) -> Json<Vec<PostRecord>> {
    Json(state.analyzer.posts())
}

async fn wordcloud(State(state): State<AppState>) -> Json<HashMap<String, u64>> {
    Json(state.analyzer.word_frequencies())
}
