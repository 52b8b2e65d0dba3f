mod processor;
mod resize;
mod transcode;
mod validation;
mod walker;

pub use processor::{EventProcessor, ProgressEvent};
pub use resize::resize_to_width_cap;
pub use transcode::transcode_file;
pub use validation::validate_settings;
pub use walker::{list_event_dirs, list_image_files};
