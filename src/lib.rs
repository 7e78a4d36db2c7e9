// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod config;
pub mod engine;
pub mod export;
pub mod ingest;
pub mod metrics;
pub mod normalize;
pub mod postlog;
pub mod rank;
pub mod sentiment;
pub mod tokenize;
pub mod trends;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::config::AnalyzerConfig;
pub use crate::engine::{IngestOutcome, TrendAnalyzer};
pub use crate::ingest::{import_csv, import_csv_str, ImportReport};
pub use crate::postlog::{PostLog, PostRecord};
pub use crate::rank::{rank, DEFAULT_MIN_MENTIONS};
pub use crate::sentiment::{
    LexiconScorer, PolarityScorer, Sentiment, SentimentClassifier,
};
pub use crate::trends::{TrendAccumulator, TrendEntry};
