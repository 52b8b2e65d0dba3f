pub mod error;
pub mod formats;
pub mod fs;

pub use error::{OptimizerError, OptimizerResult, PathError, ValidationError};
pub use formats::{format_from_extension, is_supported_input, ImageFormat, OUTPUT_EXTENSION};
pub use fs::{ensure_dir, extract_filename};
