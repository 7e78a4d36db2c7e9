//! Social Trend Analyzer — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use social_trend_analyzer::api::{create_router, AppState};
use social_trend_analyzer::config::AnalyzerConfig;
use social_trend_analyzer::engine::TrendAnalyzer;
use social_trend_analyzer::metrics::Metrics;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("social_trend_analyzer=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = AnalyzerConfig::load();
    let metrics = Metrics::init(config.default_min_mentions);

    let state = AppState {
        analyzer: Arc::new(TrendAnalyzer::new(&config)),
    };
    let app = create_router(state).merge(metrics.router());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "social trend analyzer listening");
    axum::serve(listener, app).await?;

    Ok(())
}
