//! Settings file loader.

use std::path::Path;

use super::{
    ConfigError,
    LookupSettings,
};

/// Name of the settings file looked up in a directory.
pub const CONFIG_FILE_NAME: &str = ".i18n-page.json";

/// Loads settings from `.i18n-page.json` in `dir`.
///
/// # Returns
/// - `Ok(Some(settings))`: file found, parsed and validated
/// - `Ok(None)`: no settings file in `dir`
/// - `Err(ConfigError)`: read, parse or validation failure
pub fn load_from_dir(dir: &Path) -> Result<Option<LookupSettings>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    load_from_file(&config_path).map(Some)
}

/// Loads settings from an explicit file path.
pub fn load_from_file(config_path: &Path) -> Result<LookupSettings, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)?;
    let settings: LookupSettings = serde_json::from_str(&content)?;
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    Ok(settings)
}
