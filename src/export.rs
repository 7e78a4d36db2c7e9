// src/export.rs
//! Export collaborator: writes the ranked trend table and the post log as
//! two independent CSV files. File naming and directory creation live here,
//! not in the core.

use anyhow::{Context, Result};
use chrono::Utc;
use csv::Writer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::engine::TrendAnalyzer;

/// Paths of the two files written by one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub trends: PathBuf,
    pub posts: PathBuf,
}

/// Write `trends_<stamp>.csv` and `posts_<stamp>.csv` into `out_dir`,
/// creating the directory if needed. Trends are ranked at `min_mentions`.
pub fn export_results(
    analyzer: &TrendAnalyzer,
    out_dir: impl AsRef<Path>,
    min_mentions: u64,
) -> Result<ExportPaths> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output dir: {out_dir:?}"))?;

    let stamp = Utc::now().format("%Y%m%d_%H%M%S");

    let trends_path = out_dir.join(format!("trends_{stamp}.csv"));
    let mut w = Writer::from_path(&trends_path)
        .with_context(|| format!("failed to create {trends_path:?}"))?;
    for entry in analyzer.trending(min_mentions) {
        w.serialize(entry).context("failed to write trend row")?;
    }
    w.flush().context("failed to flush trends file")?;

    let posts_path = out_dir.join(format!("posts_{stamp}.csv"));
    let mut w = Writer::from_path(&posts_path)
        .with_context(|| format!("failed to create {posts_path:?}"))?;
    for record in analyzer.posts() {
        w.serialize(record).context("failed to write post row")?;
    }
    w.flush().context("failed to flush posts file")?;

    info!(trends = %trends_path.display(), posts = %posts_path.display(), "results exported");
    Ok(ExportPaths {
        trends: trends_path,
        posts: posts_path,
    })
}
