//! A fully loaded site: settings, catalogue and translator.

use std::path::Path;

use crate::catalogue::Catalogue;
use crate::config::{
    ConfigError,
    ConfigManager,
    SiteSettings,
};
use crate::i18n::{
    FilePreferenceStore,
    LocaleContext,
    LocaleRegistry,
    Translator,
};
use crate::routes::RouteManifest;

/// Everything a build step needs, loaded once and then shared read-only.
#[derive(Debug, Clone)]
pub struct Site {
    /// Validated settings and site root.
    config: ConfigManager,
    /// Loaded services and locations.
    catalogue: Catalogue,
    /// Loaded dictionaries.
    translator: Translator,
}

impl Site {
    /// Load settings, data files and dictionaries from `root`.
    ///
    /// # Errors
    /// Returns error only for an unreadable or invalid settings file. Missing
    /// data files and dictionaries degrade to empty content.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = ConfigManager::new();
        config.load_settings(Some(root.to_path_buf()))?;

        Ok(Self::from_config(config))
    }

    /// Load data files and dictionaries for already loaded settings.
    #[must_use]
    pub fn from_config(config: ConfigManager) -> Self {
        let root = config.site_root().unwrap_or_else(|| Path::new("."));
        let translator = Translator::load(config.get_settings(), root);
        let catalogue = Catalogue::load(&config);

        Self { config, catalogue, translator }
    }

    /// Site root; the current directory when the settings were not loaded from disk.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.config.site_root().unwrap_or_else(|| Path::new("."))
    }

    #[must_use]
    pub const fn settings(&self) -> &SiteSettings {
        self.config.get_settings()
    }

    #[must_use]
    pub const fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    #[must_use]
    pub const fn translator(&self) -> &Translator {
        &self.translator
    }

    #[must_use]
    pub const fn registry(&self) -> &LocaleRegistry {
        self.translator.registry()
    }

    #[must_use]
    pub fn preference_store(&self) -> FilePreferenceStore {
        FilePreferenceStore::new(self.config.preference_path())
    }

    /// Start a locale context from an explicit locale or the stored preference.
    #[must_use]
    pub fn locale_context(&self, explicit: Option<&str>) -> LocaleContext {
        LocaleContext::negotiate(self.registry(), explicit, &self.preference_store())
    }

    #[must_use]
    pub fn route_manifest(&self) -> RouteManifest {
        RouteManifest::build(&self.catalogue, self.registry(), &self.settings().base_url)
    }
}
