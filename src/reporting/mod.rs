mod reporter;

pub use reporter::{event_summary_line, file_line, percentage_saved, ConversionReport};
