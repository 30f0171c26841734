use crate::config::types::{FetchSettings, LocaleSettings, Settings};
use crate::ConfigError;

/// Validates the entire settings file
pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    validate_fetch_settings(&settings.fetch)?;
    validate_locale_settings(&settings.locales)?;
    Ok(())
}

/// Validates fetch settings
fn validate_fetch_settings(settings: &FetchSettings) -> Result<(), ConfigError> {
    if settings.timeout_secs < 1 || settings.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            settings.timeout_secs
        )));
    }

    if settings.concurrency < 1 || settings.concurrency > 100 {
        return Err(ConfigError::Validation(format!(
            "concurrency must be between 1 and 100, got {}",
            settings.concurrency
        )));
    }

    if settings.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates locale list settings
fn validate_locale_settings(settings: &LocaleSettings) -> Result<(), ConfigError> {
    if settings.files.is_empty() {
        return Err(ConfigError::Validation(
            "at least one locale file must be configured".to_string(),
        ));
    }

    if let Some(blank) = settings.files.iter().find(|f| f.trim().is_empty()) {
        return Err(ConfigError::Validation(format!(
            "locale file names cannot be blank, got '{}'",
            blank
        )));
    }

    Ok(())
}
