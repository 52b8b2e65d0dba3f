//! Core types for the conversion pipeline:
//! - [`ConversionSettings`]: tuning constants for the WebP transcode
//! - [`ImageTask`]: one source file and its destination path
//! - [`OptimizationResult`]: per-file outcome and byte counts
//! - [`EventSummary`]: per-event accumulated totals

mod task;
mod types;

pub use task::ImageTask;
pub use types::{ConversionSettings, EventSummary, OptimizationResult};
