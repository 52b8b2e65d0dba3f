//! Directory discovery for the conversion run.
//!
//! The input root contains one subdirectory per event; regular files at that
//! level are ignored. Listings are sorted so runs are deterministic.

use crate::utils::{is_supported_input, OptimizerResult, ValidationError};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Returns the names of the immediate subdirectories of `root`.
///
/// A missing or non-directory root is a fatal setup error; the caller aborts
/// the whole run rather than recovering partially.
pub async fn list_event_dirs(root: &Path) -> OptimizerResult<Vec<String>> {
    if !root.exists() {
        return Err(ValidationError::path_not_found(root).into());
    }
    if !root.is_dir() {
        return Err(ValidationError::not_a_directory(root).into());
    }

    let mut entries = fs::read_dir(root).await?;
    let mut events = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let file_type = entry.file_type().await?;
        if !file_type.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            events.push(name.to_string());
        }
    }

    events.sort();
    Ok(events)
}

/// Lists the files in `dir` whose extension matches the input allow-list.
///
/// Non-image files are skipped entirely; they appear in neither the processed
/// count nor any size totals.
pub async fn list_image_files(dir: &Path) -> OptimizerResult<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !entry.file_type().await?.is_file() {
            continue;
        }
        if is_supported_input(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
