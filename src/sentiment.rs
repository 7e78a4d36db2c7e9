// src/sentiment.rs
//! Three-way sentiment classification over an injectable polarity scorer.
//!
//! The classifier only owns the threshold policy (score > 0 → Positive,
//! < 0 → Negative, == 0 → Neutral). The numeric score comes from a
//! [`PolarityScorer`] capability so tests can swap in deterministic stubs
//! and a real NLP backend can be plugged in later. The bundled
//! [`LexiconScorer`] is a small word-list scorer with a negation window.

use anyhow::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

static LEXICON: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, i32>>(raw).expect("valid sentiment lexicon")
});

/// Maximum absolute word score in the lexicon; bounds the mean.
const LEXICON_SCALE: f32 = 3.0;

/// Sentiment label attached to every ingested post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Polarity-scoring capability. Returns a signed score in [-1, 1].
///
/// Implementations may fail (remote backend, bad encoding); the classifier
/// recovers from that locally, so an `Err` never aborts ingestion.
pub trait PolarityScorer: Send + Sync {
    fn score_polarity(&self, text: &str) -> Result<f32>;
    /// Scorer name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Convenient alias used by callers.
pub type DynPolarityScorer = Arc<dyn PolarityScorer>;

/// Default scorer: embedded lexicon with a 3-token negation window.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn word_score(w: &str) -> i32 {
        *LEXICON.get(w).unwrap_or(&0)
    }
}

impl PolarityScorer for LexiconScorer {
    fn score_polarity(&self, text: &str) -> Result<f32> {
        // Collect into a vector because negation looks back at prior tokens.
        let tokens: Vec<String> = tokenize(text).collect();
        if tokens.is_empty() {
            return Ok(0.0);
        }

        let mut sum: i32 = 0;
        for i in 0..tokens.len() {
            // negator within the last 1..=3 tokens inverts the sign
            let negated = (1..=3).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
            let base = Self::word_score(tokens[i].as_str());
            if base != 0 {
                sum += if negated { -base } else { base };
            }
        }

        // Mean score per token, bounded to [-1, 1].
        let polarity = sum as f32 / (tokens.len() as f32 * LEXICON_SCALE);
        Ok(polarity.clamp(-1.0, 1.0))
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

/// Threshold policy on top of a polarity score.
#[inline]
pub fn sentiment_from_polarity(score: f32) -> Sentiment {
    if score > 0.0 {
        Sentiment::Positive
    } else if score < 0.0 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Classifier wrapping a scorer capability with the fail-soft policy.
#[derive(Clone)]
pub struct SentimentClassifier {
    scorer: DynPolarityScorer,
}

impl SentimentClassifier {
    pub fn new(scorer: DynPolarityScorer) -> Self {
        Self { scorer }
    }

    /// Classify raw (pre-normalization) text. A scorer failure degrades to
    /// `Neutral` and is logged; it never propagates past this boundary.
    pub fn classify(&self, text: &str) -> Sentiment {
        match self.scorer.score_polarity(text) {
            Ok(score) => sentiment_from_polarity(score),
            Err(e) => {
                warn!(
                    error = ?e,
                    scorer = self.scorer.name(),
                    "polarity scoring failed, falling back to neutral"
                );
                Sentiment::Neutral
            }
        }
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(Arc::new(LexiconScorer::new()))
    }
}

/// Scorer-local tokenization: alphanumeric tokens, lower-cased. Splitting on
/// non-alphanumerics turns "isn't" into "isn", which the negator set expects.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not" | "no" | "never" | "isn" | "wasn" | "aren" | "won" | "cannot" | "without"
    )
}
