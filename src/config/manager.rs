//! Owner of the loaded settings and the site root.

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    SiteSettings,
    loader,
};

/// Holds the validated settings and resolves site-relative paths.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Current settings
    current_settings: SiteSettings,

    /// Site root; `None` until settings are loaded from disk
    site_root: Option<PathBuf>,
}

impl ConfigManager {
    /// Creates a manager holding the default settings
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: SiteSettings::default(), site_root: None }
    }

    /// Loads and validates the settings of `site_root`
    ///
    /// Defaults are used when there is no settings file. On error the previous
    /// settings are kept.
    ///
    /// # Errors
    /// - the file cannot be read
    /// - the file is not valid JSON
    /// - the settings fail validation
    pub fn load_settings(&mut self, site_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for site root: {:?}", site_root);

        let settings = if let Some(root) = &site_root {
            loader::load_from_site_root(root)?.map_or_else(SiteSettings::default, |loaded| {
                tracing::debug!("Loaded site settings: {:?}", loaded);
                loaded
            })
        } else {
            SiteSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.site_root = site_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// Current settings
    #[must_use]
    pub const fn get_settings(&self) -> &SiteSettings {
        &self.current_settings
    }

    /// Site root, if settings were loaded from disk
    #[must_use]
    pub fn site_root(&self) -> Option<&Path> {
        self.site_root.as_deref()
    }

    /// Resolves `relative` against the site root
    ///
    /// Without a site root the path stays relative to the current directory.
    #[must_use]
    pub fn resolve_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.site_root.as_ref().map_or_else(
            || relative.as_ref().to_path_buf(),
            |root| root.join(relative.as_ref()),
        )
    }

    /// Paths of the services and locations data files
    #[must_use]
    pub fn data_file_paths(&self) -> (PathBuf, PathBuf) {
        let data_dir = self.resolve_path(&self.current_settings.data_dir);
        (
            data_dir.join(&self.current_settings.services_file),
            data_dir.join(&self.current_settings.locations_file),
        )
    }

    /// Where the locale preference is stored
    #[must_use]
    pub fn preference_path(&self) -> PathBuf {
        self.resolve_path(&self.current_settings.preference_file)
    }
}
