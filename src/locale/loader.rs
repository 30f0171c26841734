use crate::config::LocaleSettings;
use crate::locale::LocaleSet;
use crate::ConfigError;
use std::path::{Path, PathBuf};

/// Loads every configured code list into a single `LocaleSet`
///
/// Each file holds one code per line. Lines are trimmed and blank lines are
/// skipped. A file that cannot be read aborts the load.
///
/// # Example
///
/// ```no_run
/// use web_crawler::config::LocaleSettings;
/// use web_crawler::locale::load_locales;
///
/// let locales = load_locales(&LocaleSettings::default()).unwrap();
/// println!("{} codes loaded", locales.len());
/// ```
pub fn load_locales(settings: &LocaleSettings) -> Result<LocaleSet, ConfigError> {
    load_locale_files(&settings.paths())
}

/// Loads the given code lists into a single `LocaleSet`
pub fn load_locale_files(paths: &[PathBuf]) -> Result<LocaleSet, ConfigError> {
    let mut codes = Vec::new();

    for path in paths {
        let before = codes.len();
        codes.extend(read_codes(path)?);
        tracing::debug!(
            "Loaded {} codes from {}",
            codes.len() - before,
            path.display()
        );
    }

    Ok(LocaleSet::from_codes(codes))
}

fn read_codes(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
