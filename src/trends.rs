// src/trends.rs
//! # Trend Accumulator
//! Cumulative per-word mention counts with first-seen timestamps.
//!
//! The table only ever grows: `mentions` is monotonically non-decreasing and
//! `first_seen` is written exactly once, by the first ingest that contains
//! the word. There is deliberately no decay or eviction; a long-running
//! variant would need an explicitly specified windowing policy, not a silent
//! one bolted on here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the trend table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendEntry {
    pub word: String,
    pub mentions: u64,
    pub first_seen: DateTime<Utc>,
}

/// Owns the word → entry table for the analyzer's lifetime.
#[derive(Debug, Default)]
pub struct TrendAccumulator {
    table: HashMap<String, TrendEntry>,
}

impl TrendAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one record's token sequence into the table.
    ///
    /// Duplicates in `tokens` count as separate mentions. Calling this N
    /// times with the same tokens adds N× the multiplicity; `first_seen`
    /// keeps the timestamp of the word's first-ever ingest.
    pub fn ingest<I, S>(&mut self, tokens: I, timestamp: DateTime<Utc>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            let word = token.as_ref();
            let entry = self
                .table
                .entry(word.to_string())
                .or_insert_with(|| TrendEntry {
                    word: word.to_string(),
                    mentions: 0,
                    first_seen: timestamp,
                });
            entry.mentions += 1;
        }
    }

    /// Number of distinct words tracked.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&TrendEntry> {
        self.table.get(word)
    }

    /// Disposable copy of the table for ranking/export.
    pub fn snapshot(&self) -> Vec<TrendEntry> {
        self.table.values().cloned().collect()
    }

    /// Read-only word → mentions projection for visualization consumers
    /// (word clouds and the like); rendering is not our concern.
    pub fn word_frequencies(&self) -> HashMap<String, u64> {
        self.table
            .iter()
            .map(|(w, e)| (w.clone(), e.mentions))
            .collect()
    }
}
