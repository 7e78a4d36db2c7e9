// src/ingest/mod.rs
//! Bulk tabular import: feeds CSV rows into a [`TrendAnalyzer`].
//!
//! A malformed row is skipped, counted, and logged; the rest of the batch
//! proceeds. Partial success is always reported via [`ImportReport`], never
//! swallowed. Only a whole-file failure (open/read) is an `Err`.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::{info, warn};

use crate::engine::TrendAnalyzer;

pub const CSV_IMPORT_SOURCE: &str = "csv_import";

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("import_rows_total", "Rows read from import files.");
        describe_counter!(
            "import_rows_skipped_total",
            "Rows skipped due to parse failures."
        );
    });
}

/// Outcome of one bulk import: how many rows were fed in, how many skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    timestamp: String,
    text: String,
    #[serde(default)]
    source: Option<String>,
}

/// Accepted timestamp formats: RFC 3339, or a naive
/// `YYYY-MM-DD HH:MM:SS` assumed UTC.
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%d %H:%M:%S")
        .with_context(|| format!("unrecognized timestamp: {raw:?}"))?;
    Ok(naive.and_utc())
}

/// Import posts from a CSV file with a `timestamp,text[,source]` header.
pub fn import_csv(path: impl AsRef<Path>, analyzer: &TrendAnalyzer) -> Result<ImportReport> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("failed to open import file: {path:?}"))?;
    import_from_reader(csv::Reader::from_reader(file), analyzer, &path.display().to_string())
}

fn import_from_reader<R: std::io::Read>(
    mut reader: csv::Reader<R>,
    analyzer: &TrendAnalyzer,
    origin: &str,
) -> Result<ImportReport> {
    ensure_metrics_described();

    let mut report = ImportReport::default();

    // Row numbers are 1-based data rows (header excluded), for operator logs.
    for (idx, row) in reader.deserialize::<RawRow>().enumerate() {
        let row_no = idx + 1;
        counter!("import_rows_total").increment(1);

        let parsed = row
            .map_err(anyhow::Error::from)
            .and_then(|r| Ok((parse_timestamp(&r.timestamp)?, r)));
        match parsed {
            Ok((ts, raw)) => {
                let source = raw.source.as_deref().unwrap_or(CSV_IMPORT_SOURCE);
                analyzer.ingest(&raw.text, ts, source);
                report.imported += 1;
            }
            Err(e) => {
                report.skipped += 1;
                counter!("import_rows_skipped_total").increment(1);
                warn!(origin, row = row_no, error = %e, "skipping malformed import row");
            }
        }
    }

    info!(
        origin,
        imported = report.imported,
        skipped = report.skipped,
        "bulk import finished"
    );
    Ok(report)
}

/// Import from an in-memory CSV string; used by tests and any feed that
/// already holds the bytes.
pub fn import_csv_str(data: &str, analyzer: &TrendAnalyzer) -> Result<ImportReport> {
    import_from_reader(
        csv::Reader::from_reader(data.as_bytes()),
        analyzer,
        "<memory>",
    )
}
