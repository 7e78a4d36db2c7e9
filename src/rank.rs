// src/rank.rs
//! Trend ranking: threshold filter plus a deterministic ordering.
//!
//! Reads snapshots only; never mutates accumulator state.

use crate::trends::TrendEntry;

/// Default reporting threshold for "trending".
pub const DEFAULT_MIN_MENTIONS: u64 = 3;

/// Filter to entries with `mentions >= min_mentions`, sorted by mentions
/// descending. Ties break lexicographically ascending on `word` so repeated
/// calls over the same snapshot agree (map iteration order does not).
///
/// An empty result is a normal outcome, not an error.
pub fn rank(snapshot: Vec<TrendEntry>, min_mentions: u64) -> Vec<TrendEntry> {
    let mut ranked: Vec<TrendEntry> = snapshot
        .into_iter()
        .filter(|e| e.mentions >= min_mentions)
        .collect();
    ranked.sort_by(|a, b| b.mentions.cmp(&a.mentions).then_with(|| a.word.cmp(&b.word)));
    ranked
}
