//! Core types for conversion settings and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tuning constants for the WebP transcode pipeline.
///
/// The binary runs with the defaults below; library callers and tests can
/// substitute their own values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionSettings {
    /// Upper bound on output width in pixels; narrower images are never enlarged
    #[serde(rename = "maxWidth")]
    pub max_width: u32,
    /// Lossy WebP quality (1-100)
    pub quality: f32,
    /// WebP encoder effort (0-6, higher is slower and smaller)
    pub effort: i32,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            max_width: 1920,
            quality: 90.0,
            effort: 6,
        }
    }
}

/// Result of transcoding one image file.
///
/// One result is produced per discovered file, failed files included, so the
/// aggregates always line up with the file count.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    /// Path to the original input file
    pub original_path: PathBuf,
    /// Path to the transcoded output file
    pub optimized_path: PathBuf,
    /// Original file size in bytes
    pub original_size: u64,
    /// Transcoded file size in bytes
    pub optimized_size: u64,
    /// Whether the transcode succeeded
    pub success: bool,
    /// Error message if the transcode failed
    pub error: Option<String>,
    /// Bytes saved (can be negative if the file grew)
    #[serde(rename = "savedBytes")]
    pub saved_bytes: i64,
    /// Size reduction as a percentage of the original size
    #[serde(rename = "compressionRatio")]
    pub compression_ratio: f64,
}

impl OptimizationResult {
    /// Builds a zero-contribution result for a file that failed to transcode.
    ///
    /// Failed files count toward the processed total but contribute no bytes
    /// to either side of the savings calculation.
    pub fn failed(input: PathBuf, output: PathBuf, error: String) -> Self {
        Self {
            original_path: input,
            optimized_path: output,
            original_size: 0,
            optimized_size: 0,
            success: false,
            error: Some(error),
            saved_bytes: 0,
            compression_ratio: 0.0,
        }
    }
}

/// Per-event byte totals, accumulated as files are processed.
#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    /// Event folder name
    pub name: String,
    /// Number of qualifying files discovered (failures included)
    pub file_count: usize,
    /// Sum of original sizes in bytes
    pub original_bytes: u64,
    /// Sum of transcoded sizes in bytes
    pub optimized_bytes: u64,
}

impl EventSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_count: 0,
            original_bytes: 0,
            optimized_bytes: 0,
        }
    }

    /// Folds one file result into the totals.
    pub fn record(&mut self, result: &OptimizationResult) {
        self.file_count += 1;
        self.original_bytes += result.original_size;
        self.optimized_bytes += result.optimized_size;
    }

    pub fn saved_bytes(&self) -> i64 {
        self.original_bytes as i64 - self.optimized_bytes as i64
    }
}
