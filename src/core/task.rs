//! Image task definition and destination-path derivation.

use crate::utils::OUTPUT_EXTENSION;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A single file transcode: one source image and its destination path.
#[derive(Debug, Clone, Serialize)]
pub struct ImageTask {
    /// Path to the source image file
    pub input_path: PathBuf,
    /// Path where the transcoded image will be written
    pub output_path: PathBuf,
}

impl ImageTask {
    /// Builds a task for `input` with a destination under `output_dir`.
    ///
    /// The destination keeps the source filename with its extension replaced
    /// by the output format's. A source already carrying the output extension
    /// keeps its name unchanged.
    pub fn for_file(input: &Path, output_dir: &Path) -> Self {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");

        Self {
            input_path: input.to_path_buf(),
            output_path: output_dir.join(format!("{stem}.{OUTPUT_EXTENSION}")),
        }
    }
}
