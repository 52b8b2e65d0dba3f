// Module declarations in dependency order
pub mod core;
pub mod processing;
pub mod reporting;
pub mod utils;

// Public exports for external consumers
pub use self::core::{ConversionSettings, EventSummary, ImageTask, OptimizationResult};
pub use self::processing::{EventProcessor, ProgressEvent};
pub use self::reporting::ConversionReport;
pub use self::utils::{OptimizerError, OptimizerResult};

// This library file is used as a public API for consuming this crate as a library.
// The actual application entry point is in main.rs.
