//! Single-file WebP transcode: decode, width-cap resize, lossy re-encode.
//!
//! Runs synchronously; the processor dispatches it through
//! `tokio::task::spawn_blocking` so the async runtime is never blocked on
//! image decode/encode, which dominates the cost of a run.

use crate::core::{ConversionSettings, ImageTask, OptimizationResult};
use crate::processing::resize::resize_to_width_cap;
use crate::utils::{extract_filename, OptimizerError, OptimizerResult};
use tracing::debug;
use webp::{Encoder, WebPConfig};

/// Transcodes one image task synchronously.
///
/// Reads the source, resizes under the width cap, re-encodes as lossy WebP
/// at the configured quality and effort, and overwrites the destination if
/// it exists. Failures are returned to the caller, which isolates them to
/// this one file.
pub fn transcode_file(
    task: &ImageTask,
    settings: &ConversionSettings,
) -> OptimizerResult<OptimizationResult> {
    // Original size before any transformation
    let original_size = std::fs::metadata(&task.input_path)
        .map(|m| m.len())
        .map_err(|e| OptimizerError::processing(format!("Cannot read input file: {e}")))?;

    let image = image::open(&task.input_path).map_err(|e| {
        OptimizerError::processing(format!(
            "Failed to load '{}': {e}",
            task.input_path.display()
        ))
    })?;

    debug!(
        "Loaded '{}': {}x{}",
        extract_filename(&task.input_path),
        image.width(),
        image.height()
    );

    let image = resize_to_width_cap(image, settings.max_width);
    let encoded = encode_webp(&image, settings)?;

    std::fs::write(&task.output_path, &encoded)
        .map_err(|e| OptimizerError::processing(format!("Cannot write output file: {e}")))?;

    let optimized_size = encoded.len() as u64;
    let saved_bytes = original_size as i64 - optimized_size as i64;
    let compression_ratio = if original_size > 0 {
        saved_bytes as f64 / original_size as f64 * 100.0
    } else {
        0.0
    };

    debug!(
        "'{}' -> {} bytes saved ({:.1}%)",
        extract_filename(&task.input_path),
        saved_bytes,
        compression_ratio
    );

    Ok(OptimizationResult {
        original_path: task.input_path.clone(),
        optimized_path: task.output_path.clone(),
        original_size,
        optimized_size,
        success: true,
        error: None,
        saved_bytes,
        compression_ratio,
    })
}

/// Encodes `image` as lossy WebP at the configured quality and effort.
fn encode_webp(
    image: &image::DynamicImage,
    settings: &ConversionSettings,
) -> OptimizerResult<Vec<u8>> {
    let mut config = WebPConfig::new()
        .map_err(|_| OptimizerError::processing("Failed to initialise WebP encoder config"))?;
    config.lossless = 0;
    config.quality = settings.quality;
    config.method = settings.effort;

    // libwebp only accepts RGB/RGBA input; normalise other color types.
    let rgba = image.to_rgba8();
    let encoder = Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height());

    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| OptimizerError::processing(format!("WebP encode failed: {e:?}")))?;

    Ok(memory.to_vec())
}
