// src/normalize.rs
//! Text normalization: the first stage of the trend pipeline.
//!
//! Every input maps to a string of lowercase ASCII letters separated by
//! single spaces. There are no error conditions; unusual input just yields
//! an empty string.

use once_cell::sync::OnceCell;
use regex::Regex;

/// Normalize raw post text for tokenization.
///
/// 1) lowercase, 2) delete everything that is not an ASCII letter or
/// whitespace (deletion, not replacement with a space), 3) collapse
/// whitespace runs and trim.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();

    static RE_KEEP: OnceCell<Regex> = OnceCell::new();
    let re_keep = RE_KEEP.get_or_init(|| Regex::new(r"[^a-zA-Z\s]").unwrap());
    let stripped = re_keep.replace_all(&lowered, "");

    // split_whitespace handles trim + collapse in one pass
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
