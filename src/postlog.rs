// src/postlog.rs
//! Append-only log of every ingested post with its derived sentiment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sentiment::Sentiment;

/// One ingested post. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub timestamp: DateTime<Utc>,
    pub text: String,
    pub source: String,
    pub sentiment: Sentiment,
}

/// Ordered, append-only sequence of post records. No dedup, no size cap;
/// retention/export policy belongs to the surrounding collaborators.
#[derive(Debug, Default)]
pub struct PostLog {
    entries: Vec<PostRecord>,
}

impl PostLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: PostRecord) {
        self.entries.push(record);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Disposable copy in ingestion order.
    pub fn snapshot(&self) -> Vec<PostRecord> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn append_preserves_order_and_length() {
        let mut log = PostLog::new();
        for (i, txt) in ["first", "second", "third"].iter().enumerate() {
            log.append(PostRecord {
                timestamp: Utc.timestamp_opt(i as i64, 0).unwrap(),
                text: txt.to_string(),
                source: "test".into(),
                sentiment: Sentiment::Neutral,
            });
        }
        assert_eq!(log.len(), 3);
        let snap = log.snapshot();
        assert_eq!(snap[0].text, "first");
        assert_eq!(snap[2].text, "third");
    }
}
