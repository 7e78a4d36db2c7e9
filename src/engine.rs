// src/engine.rs
//! # Trend Analyzer
//! An instantiable analyzer owning the trend table and the post log.
//!
//! Pipeline per record: normalize → tokenize/filter → accumulate mentions;
//! in parallel the raw text is classified and the record appended to the
//! post log. State lives behind a `Mutex` so one instance can be shared
//! across HTTP handlers; the lock serializes `ingest`, which keeps the
//! per-word monotonic-growth and append-only ordering invariants intact
//! ("first observed wins" for `first_seen` holds under the lock). No
//! module-level singletons: independent instances never share state.

use chrono::{DateTime, Utc};
use metrics::counter;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::normalize::normalize;
use crate::postlog::{PostLog, PostRecord};
use crate::rank::rank;
use crate::sentiment::{Sentiment, SentimentClassifier};
use crate::tokenize::{meaningful_tokens_with, TokenFilter};
use crate::trends::{TrendAccumulator, TrendEntry};

/// What one ingestion call derived from the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOutcome {
    pub sentiment: Sentiment,
    /// Meaningful tokens merged into the trend table.
    pub token_count: usize,
}

#[derive(Debug, Default)]
struct Inner {
    trends: TrendAccumulator,
    posts: PostLog,
}

pub struct TrendAnalyzer {
    inner: Mutex<Inner>,
    classifier: SentimentClassifier,
    filter: TokenFilter,
    default_min_mentions: u64,
}

impl TrendAnalyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self::with_classifier(config, SentimentClassifier::default())
    }

    /// Construct with a custom classifier (deterministic stubs in tests,
    /// real NLP backends elsewhere).
    pub fn with_classifier(config: &AnalyzerConfig, classifier: SentimentClassifier) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            classifier,
            filter: config.token_filter(),
            default_min_mentions: config.default_min_mentions,
        }
    }

    /// Ingest one record: merge its meaningful tokens into the trend table
    /// and append the raw text with its sentiment to the post log.
    pub fn ingest(&self, text: &str, timestamp: DateTime<Utc>, source: &str) -> IngestOutcome {
        let tokens = meaningful_tokens_with(&normalize(text), &self.filter);
        let sentiment = self.classifier.classify(text);

        let mut inner = self.inner.lock().expect("analyzer mutex poisoned");
        inner.trends.ingest(&tokens, timestamp);
        inner.posts.append(PostRecord {
            timestamp,
            text: text.to_string(),
            source: source.to_string(),
            sentiment,
        });
        drop(inner);

        counter!("analyzer_posts_total").increment(1);
        debug!(source, tokens = tokens.len(), ?sentiment, "post ingested");

        IngestOutcome {
            sentiment,
            token_count: tokens.len(),
        }
    }

    /// Ranked trends with `mentions >= min_mentions`.
    pub fn trending(&self, min_mentions: u64) -> Vec<TrendEntry> {
        let snapshot = {
            let inner = self.inner.lock().expect("analyzer mutex poisoned");
            inner.trends.snapshot()
        };
        rank(snapshot, min_mentions)
    }

    /// Ranked trends at the configured default threshold.
    pub fn trending_default(&self) -> Vec<TrendEntry> {
        self.trending(self.default_min_mentions)
    }

    pub fn default_min_mentions(&self) -> u64 {
        self.default_min_mentions
    }

    /// Word → mentions projection for visualization consumers.
    pub fn word_frequencies(&self) -> HashMap<String, u64> {
        let inner = self.inner.lock().expect("analyzer mutex poisoned");
        inner.trends.word_frequencies()
    }

    /// Full post log in ingestion order.
    pub fn posts(&self) -> Vec<PostRecord> {
        let inner = self.inner.lock().expect("analyzer mutex poisoned");
        inner.posts.snapshot()
    }

    /// Distinct words currently tracked.
    pub fn trend_count(&self) -> usize {
        let inner = self.inner.lock().expect("analyzer mutex poisoned");
        inner.trends.len()
    }

    pub fn post_count(&self) -> usize {
        let inner = self.inner.lock().expect("analyzer mutex poisoned");
        inner.posts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn ingest_updates_table_and_log_together() {
        let analyzer = TrendAnalyzer::new(&AnalyzerConfig::default());
        let out = analyzer.ingest("I love the sunny weather today", ts(1), "manual_input");
        assert_eq!(out.token_count, 4); // love sunny weather today
        assert_eq!(analyzer.post_count(), 1);
        assert_eq!(analyzer.trend_count(), 4);
    }

    #[test]
    fn post_log_length_equals_ingestion_calls() {
        let analyzer = TrendAnalyzer::new(&AnalyzerConfig::default());
        for i in 0..5 {
            analyzer.ingest("same text every time", ts(i), "test");
        }
        assert_eq!(analyzer.post_count(), 5);
    }

    #[test]
    fn instances_do_not_share_state() {
        let cfg = AnalyzerConfig::default();
        let a = TrendAnalyzer::new(&cfg);
        let b = TrendAnalyzer::new(&cfg);
        a.ingest("sunny sunny sunny sunny", ts(1), "a");
        assert_eq!(b.trend_count(), 0);
        assert_eq!(b.post_count(), 0);
    }

    #[test]
    fn trending_reads_a_snapshot_without_mutating() {
        let analyzer = TrendAnalyzer::new(&AnalyzerConfig::default());
        analyzer.ingest("sunny days", ts(1), "t");
        let before = analyzer.trend_count();
        let _ = analyzer.trending(0);
        let _ = analyzer.trending(100);
        assert_eq!(analyzer.trend_count(), before);
    }
}
