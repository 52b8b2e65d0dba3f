//! CLI entry point for the event image optimizer.
//!
//! Takes no arguments: the input/output roots and tuning constants are fixed
//! below. The savings report goes to stdout; diagnostics go to stderr via
//! `tracing` and are controlled with `RUST_LOG`.

use event_optimizer::core::ConversionSettings;
use event_optimizer::processing::{EventProcessor, ProgressEvent};
use event_optimizer::reporting::{event_summary_line, file_line};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const INPUT_BASE: &str = "public/event";
const OUTPUT_BASE: &str = "public/images/events";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stderr)
        .compact();               // Use compact formatter instead of pretty

    subscriber.init();

    let settings = ConversionSettings::default();

    println!("\n🎉 Event Images Optimization\n");
    println!("Input: {INPUT_BASE}/");
    println!("Output: {OUTPUT_BASE}/\n");
    println!(
        "Settings: Max {}px width, {:.0}% quality\n",
        settings.max_width, settings.quality
    );

    let processor = EventProcessor::new(settings)?;
    let report = processor
        .process_all(
            Path::new(INPUT_BASE),
            Path::new(OUTPUT_BASE),
            |event| match event {
                ProgressEvent::EventStarted { name } => println!("\n📁 {name}:\n"),
                ProgressEvent::FileCompleted { result } => println!("{}", file_line(&result)),
                ProgressEvent::EventCompleted { summary } => {
                    println!("{}", event_summary_line(&summary))
                }
            },
        )
        .await?;

    println!("\n{report}");
    Ok(())
}
