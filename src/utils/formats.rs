use crate::utils::OptimizerError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Extension used for all transcoded output files.
pub const OUTPUT_EXTENSION: &str = "webp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    JPEG,
    PNG,
    WebP,
}

impl ImageFormat {
    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
            Self::WebP => &["webp"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// Get the primary extension for this format
    pub fn primary_extension(&self) -> &str {
        self.extensions()[0]
    }
}

impl FromStr for ImageFormat {
    type Err = OptimizerError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        let ext = ext.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::JPEG),
            "png" => Ok(Self::PNG),
            "webp" => Ok(Self::WebP),
            _ => Err(OptimizerError::format(format!(
                "Unsupported image format: {}",
                ext
            ))),
        }
    }
}

/// Get format from file extension
pub fn format_from_extension(path: &Path) -> Result<ImageFormat, OptimizerError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| {
            OptimizerError::format(format!("File has no extension: {}", path.display()))
        })?;

    ImageFormat::from_str(ext)
}

/// Check whether a file qualifies for transcoding based on its extension.
///
/// The allow-list mirrors the input formats the pipeline accepts; anything
/// else (text files, raw formats, gif/tiff/heic) is skipped entirely.
pub fn is_supported_input(path: &Path) -> bool {
    format_from_extension(path).is_ok()
}
