// WHY: machine-readable per-input metrics for the --stats-out report

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::colorizer::{ColoredSentence, LengthRankMap};

/// Per-input processing statistics
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FileStats {
    /// Input path, `<stdin>` or `<example>`
    pub path: String,
    /// Number of characters processed
    pub chars_processed: u64,
    /// Number of sentences produced
    pub sentences: u64,
    /// Number of distinct sentence lengths (colors used)
    pub distinct_lengths: u64,
    /// Processing time in milliseconds, read included
    pub processing_time_ms: u64,
    /// Processing status (success, failed)
    pub status: String,
    /// Error message if processing failed
    pub error: Option<String>,
}

impl FileStats {
    pub fn success(path: impl Into<String>, text: &str, sentences: &[ColoredSentence], processing_time_ms: u64) -> Self {
        let ranks = LengthRankMap::from_lengths(sentences.iter().map(|s| s.length));
        Self {
            path: path.into(),
            chars_processed: text.chars().count() as u64,
            sentences: sentences.len() as u64,
            distinct_lengths: ranks.distinct_count() as u64,
            processing_time_ms,
            status: "success".to_string(),
            error: None,
        }
    }

    pub fn failed(path: impl Into<String>, error: impl Into<String>, processing_time_ms: u64) -> Self {
        Self {
            path: path.into(),
            chars_processed: 0,
            sentences: 0,
            distinct_lengths: 0,
            processing_time_ms,
            status: "failed".to_string(),
            error: Some(error.into()),
        }
    }
}

/// Whole-run statistics
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunStats {
    /// Seconds since the Unix epoch when the run started
    pub run_start: u64,
    pub total_processing_time_ms: u64,
    pub total_chars_processed: u64,
    pub total_sentences: u64,
    pub inputs_processed: u64,
    pub inputs_failed: u64,
    pub input_stats: Vec<FileStats>,
}

impl RunStats {
    /// Aggregate per-input stats into a run report
    pub fn from_inputs(run_start: u64, total_processing_time_ms: u64, input_stats: Vec<FileStats>) -> Self {
        let inputs_failed = input_stats.iter().filter(|s| s.error.is_some()).count() as u64;
        Self {
            run_start,
            total_processing_time_ms,
            total_chars_processed: input_stats.iter().map(|s| s.chars_processed).sum(),
            total_sentences: input_stats.iter().map(|s| s.sentences).sum(),
            inputs_processed: input_stats.len() as u64 - inputs_failed,
            inputs_failed,
            input_stats,
        }
    }

    /// Write report as pretty JSON
    pub async fn write_json(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(path, content).await?;
        Ok(())
    }
}

/// Current time as seconds since the Unix epoch
pub fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
