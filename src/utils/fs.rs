use crate::utils::{OptimizerError, OptimizerResult};
use std::path::Path;
use tokio::fs;

/// Create a directory and any missing parents. No-op if it already exists.
pub async fn ensure_dir(path: impl AsRef<Path>) -> OptimizerResult<()> {
    fs::create_dir_all(path.as_ref())
        .await
        .map_err(|e| OptimizerError::IO(format!("Failed to create directory: {}", e)))
}

/// Extract the filename component for log and report lines.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}
