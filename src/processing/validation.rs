use crate::core::ConversionSettings;
use crate::utils::{OptimizerResult, ValidationError};

/// Validates conversion settings before a run starts.
pub fn validate_settings(settings: &ConversionSettings) -> OptimizerResult<()> {
    if settings.max_width == 0 {
        return Err(ValidationError::settings("Max width cannot be 0").into());
    }

    if !(settings.quality >= 1.0 && settings.quality <= 100.0) {
        return Err(ValidationError::settings(format!(
            "Invalid quality value: {}. Must be between 1 and 100",
            settings.quality
        ))
        .into());
    }

    if !(0..=6).contains(&settings.effort) {
        return Err(ValidationError::settings(format!(
            "Invalid effort value: {}. Must be between 0 and 6",
            settings.effort
        ))
        .into());
    }

    Ok(())
}
