//! Reading the settings file.

use std::path::Path;

use super::{
    CONFIG_FILE_NAME,
    ConfigError,
    SiteSettings,
};

/// Load the settings of the site at `site_root`.
///
/// Reads `.zenith-site.json` directly under the site root.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and was parsed
/// - `Ok(None)`: there is no settings file
/// - `Err(ConfigError)`: the file could not be read or parsed
pub(super) fn load_from_site_root(site_root: &Path) -> Result<Option<SiteSettings>, ConfigError> {
    let config_path = site_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: SiteSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
