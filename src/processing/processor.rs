//! Sequential per-event batch processing.
//!
//! Events are processed one at a time, and within an event each file's
//! transcode is awaited to completion before the next begins. Sequential
//! dispatch bounds peak memory: decode/encode holds the whole image in
//! memory, so one in-flight file at a time is the safe default.

use crate::core::{ConversionSettings, EventSummary, ImageTask, OptimizationResult};
use crate::processing::transcode::transcode_file;
use crate::processing::validation::validate_settings;
use crate::processing::walker::{list_event_dirs, list_image_files};
use crate::reporting::ConversionReport;
use crate::utils::{ensure_dir, OptimizerError, OptimizerResult};
use std::path::Path;
use tracing::{debug, info, warn};

/// Progress notifications emitted as the pipeline walks events and files.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// An event folder is about to be processed
    EventStarted { name: String },
    /// One file finished (successfully or not)
    FileCompleted { result: OptimizationResult },
    /// An event folder finished; totals are final
    EventCompleted { summary: EventSummary },
}

/// Walks event folders and transcodes their images sequentially.
pub struct EventProcessor {
    settings: ConversionSettings,
}

impl EventProcessor {
    /// Creates a processor, rejecting out-of-range settings up front.
    pub fn new(settings: ConversionSettings) -> OptimizerResult<Self> {
        validate_settings(&settings)?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &ConversionSettings {
        &self.settings
    }

    /// Processes every event folder under `input_base`, mirroring the layout
    /// under `output_base`.
    ///
    /// A missing input root aborts the run; per-file failures are isolated
    /// inside [`Self::process_event`] and the batch continues.
    pub async fn process_all(
        &self,
        input_base: &Path,
        output_base: &Path,
        progress: impl Fn(ProgressEvent),
    ) -> OptimizerResult<ConversionReport> {
        let events = list_event_dirs(input_base).await?;
        info!("Processing {} event folders", events.len());

        let mut report = ConversionReport::new(output_base);

        for event in events {
            progress(ProgressEvent::EventStarted {
                name: event.clone(),
            });

            let summary = self
                .process_event(
                    &event,
                    &input_base.join(&event),
                    &output_base.join(&event),
                    &progress,
                )
                .await?;

            progress(ProgressEvent::EventCompleted {
                summary: summary.clone(),
            });
            report.record_event(summary);
        }

        Ok(report)
    }

    /// Processes one event folder and returns its accumulated totals.
    ///
    /// Ensures the output directory exists, then transcodes each qualifying
    /// file in turn. An event with zero qualifying files reports count 0 and
    /// the run moves on to the next event.
    pub async fn process_event(
        &self,
        name: &str,
        input_dir: &Path,
        output_dir: &Path,
        progress: &impl Fn(ProgressEvent),
    ) -> OptimizerResult<EventSummary> {
        ensure_dir(output_dir).await?;

        let files = list_image_files(input_dir).await?;
        debug!("Event '{}': {} qualifying files", name, files.len());

        let mut summary = EventSummary::new(name);

        for file in files {
            let task = ImageTask::for_file(&file, output_dir);
            let result = self.transcode_one(task).await?;
            summary.record(&result);
            progress(ProgressEvent::FileCompleted { result });
        }

        Ok(summary)
    }

    /// Runs one transcode on the blocking pool and awaits it.
    ///
    /// A failed transcode is demoted to a zero-contribution result so one
    /// bad file cannot abort the batch; only a panicked task propagates.
    async fn transcode_one(&self, task: ImageTask) -> OptimizerResult<OptimizationResult> {
        let settings = self.settings.clone();
        let blocking_task = task.clone();

        let result = tokio::task::spawn_blocking(move || transcode_file(&blocking_task, &settings))
            .await
            .map_err(|e| OptimizerError::processing(format!("Task panicked: {e}")))?;

        Ok(match result {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    "Image transcode failed for {}: {}",
                    task.input_path.display(),
                    e
                );
                OptimizationResult::failed(task.input_path, task.output_path, e.to_string())
            }
        })
    }
}
