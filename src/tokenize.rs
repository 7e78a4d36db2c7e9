// src/tokenize.rs
//! Tokenizer and stop-word filter.
//!
//! Operates on already-normalized text (see `normalize`). Tokens are kept in
//! input order with duplicates preserved; stop words and short tokens are
//! dropped. The length cutoff is a cheap proxy for "meaningful" content
//! words, nothing fancier.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Tokens must be strictly longer than this to survive the filter.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

/// Fixed baseline stop-word set. Config may extend it, never shrink it.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "is", "it", "on", "for",
    ]
    .into_iter()
    .collect()
});

/// Extra filtering knobs sourced from `AnalyzerConfig`.
#[derive(Debug, Clone, Default)]
pub struct TokenFilter {
    pub extra_stop_words: HashSet<String>,
    /// Overrides `DEFAULT_MIN_TOKEN_LEN` when set.
    pub min_token_len: Option<usize>,
}

impl TokenFilter {
    pub fn from_extra_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extra_stop_words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
            min_token_len: None,
        }
    }
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Split a normalized string into meaningful tokens using the baseline
/// stop-word set and length cutoff.
pub fn meaningful_tokens(normalized: &str) -> Vec<String> {
    meaningful_tokens_with(normalized, &TokenFilter::default())
}

/// Same as [`meaningful_tokens`], with config-supplied extras applied.
pub fn meaningful_tokens_with(normalized: &str, filter: &TokenFilter) -> Vec<String> {
    let min_len = filter.min_token_len.unwrap_or(DEFAULT_MIN_TOKEN_LEN);
    normalized
        .split_whitespace()
        .filter(|t| t.len() > min_len)
        .filter(|t| !is_stop_word(t) && !filter.extra_stop_words.contains(*t))
        .map(|t| t.to_string())
        .collect()
}
