// src/config.rs
//! Analyzer configuration with fail-soft loading.
//!
//! An optional TOML file tunes the token filter and the default ranking
//! threshold. A missing or unparseable file falls back to defaults so the
//! service always boots; the anomaly is logged, not fatal.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::rank::DEFAULT_MIN_MENTIONS;
use crate::tokenize::TokenFilter;

pub const DEFAULT_CONFIG_PATH: &str = "config/analyzer.toml";
pub const ENV_CONFIG_PATH: &str = "ANALYZER_CONFIG_PATH";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Stop words added on top of the built-in set.
    pub extra_stop_words: Vec<String>,
    /// Tokens must be strictly longer than this.
    pub min_token_len: usize,
    /// Threshold used when a ranking consumer does not supply one.
    pub default_min_mentions: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            extra_stop_words: Vec::new(),
            min_token_len: crate::tokenize::DEFAULT_MIN_TOKEN_LEN,
            default_min_mentions: DEFAULT_MIN_MENTIONS,
        }
    }
}

impl AnalyzerConfig {
    /// Load from `ANALYZER_CONFIG_PATH` or the default path, defaulting on
    /// any read/parse failure.
    pub fn load() -> Self {
        let path = std::env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<AnalyzerConfig>(&raw) {
                Ok(cfg) => {
                    info!(path = %path.display(), "analyzer config loaded");
                    cfg
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "bad analyzer config, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Token-filter view of this config for the tokenizer.
    pub fn token_filter(&self) -> TokenFilter {
        let mut filter = TokenFilter::from_extra_words(self.extra_stop_words.iter().cloned());
        filter.min_token_len = Some(self.min_token_len);
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = AnalyzerConfig::default();
        assert_eq!(cfg.min_token_len, 3);
        assert_eq!(cfg.default_min_mentions, 3);
        assert!(cfg.extra_stop_words.is_empty());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = AnalyzerConfig::load_from(Path::new("definitely/not/here.toml"));
        assert_eq!(cfg.default_min_mentions, 3);
    }

    #[test]
    fn parses_partial_toml() {
        let cfg: AnalyzerConfig =
            toml::from_str("extra_stop_words = [\"lol\"]\ndefault_min_mentions = 5\n").unwrap();
        assert_eq!(cfg.extra_stop_words, vec!["lol"]);
        assert_eq!(cfg.default_min_mentions, 5);
        assert_eq!(cfg.min_token_len, 3);
    }
}
