//! Human-readable savings report.
//!
//! The report is the program's actual output and goes to stdout; diagnostics
//! go through `tracing`. Megabytes are rendered to two decimal places and
//! percentages to one, and every division is guarded so an event with zero
//! original bytes reports 0% instead of NaN.

use crate::core::{EventSummary, OptimizationResult};
use crate::utils::extract_filename;
use std::fmt;
use std::path::{Path, PathBuf};

const KB: f64 = 1024.0;
const MB: f64 = 1024.0 * 1024.0;

fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Percentage of `original` saved by shrinking to `optimized`; 0 when the
/// original is empty.
pub fn percentage_saved(original: u64, optimized: u64) -> f64 {
    safe_div(
        original as f64 - optimized as f64,
        original as f64,
    ) * 100.0
}

fn format_mb(bytes: f64) -> String {
    format!("{:.2}MB", safe_div(bytes, MB))
}

/// Renders the per-file console line: checkmark or cross, filename, sizes,
/// and percentage saved.
pub fn file_line(result: &OptimizationResult) -> String {
    let name = extract_filename(&result.original_path);

    if result.success {
        format!(
            "  ✓ {}: {} → {:.0}KB ({:.1}%)",
            name,
            format_mb(result.original_size as f64),
            result.optimized_size as f64 / KB,
            result.compression_ratio
        )
    } else {
        format!(
            "  ✗ Error: {}: {}",
            name,
            result.error.as_deref().unwrap_or("unknown error")
        )
    }
}

/// Renders the per-event summary line.
pub fn event_summary_line(summary: &EventSummary) -> String {
    format!(
        "\n  Summary: {} images, saved {}\n",
        summary.file_count,
        format_mb(summary.saved_bytes() as f64)
    )
}

/// Grand-total aggregates across all processed events.
///
/// Accumulation is monotonic and single-threaded; the totals are only read
/// when the report is rendered at the end of the run.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    output_base: PathBuf,
    events: Vec<EventSummary>,
}

impl ConversionReport {
    pub fn new(output_base: &Path) -> Self {
        Self {
            output_base: output_base.to_path_buf(),
            events: Vec::new(),
        }
    }

    /// Folds a finished event's totals into the grand total.
    pub fn record_event(&mut self, summary: EventSummary) {
        self.events.push(summary);
    }

    pub fn events(&self) -> &[EventSummary] {
        &self.events
    }

    pub fn total_images(&self) -> usize {
        self.events.iter().map(|e| e.file_count).sum()
    }

    pub fn total_original_bytes(&self) -> u64 {
        self.events.iter().map(|e| e.original_bytes).sum()
    }

    pub fn total_optimized_bytes(&self) -> u64 {
        self.events.iter().map(|e| e.optimized_bytes).sum()
    }

    pub fn total_saved_bytes(&self) -> i64 {
        self.total_original_bytes() as i64 - self.total_optimized_bytes() as i64
    }

    pub fn reduction_percent(&self) -> f64 {
        percentage_saved(self.total_original_bytes(), self.total_optimized_bytes())
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = "=".repeat(50);

        writeln!(f, "{banner}")?;
        writeln!(f, "🎉 TOTAL RESULTS:")?;
        writeln!(f, "  Total events: {}", self.events.len())?;
        writeln!(f, "  Total images: {}", self.total_images())?;
        writeln!(
            f,
            "  Original size: {}",
            format_mb(self.total_original_bytes() as f64)
        )?;
        writeln!(
            f,
            "  Optimized size: {}",
            format_mb(self.total_optimized_bytes() as f64)
        )?;
        writeln!(
            f,
            "  Total saved: {}",
            format_mb(self.total_saved_bytes() as f64)
        )?;
        writeln!(f, "  Reduction: {:.1}%", self.reduction_percent())?;
        writeln!(f, "{banner}")?;
        writeln!(f)?;
        writeln!(f, "✅ All event images converted to WebP and optimized!")?;
        writeln!(f)?;
        writeln!(f, "📁 Event folders created:")?;
        for event in &self.events {
            writeln!(f, "   - {}/", self.output_base.join(&event.name).display())?;
        }

        Ok(())
    }
}
