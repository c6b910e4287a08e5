//! Supported locales and the active-locale context.

use super::PreferenceStore;
use crate::config::{
    LocaleEntry,
    SiteSettings,
};

/// Normalize locale code for comparison (lowercase and replace `_` with `-`)
fn normalize_locale_code(code: &str) -> String {
    code.trim().to_lowercase().replace('_', "-")
}

/// Closed, ordered set of supported locales with their display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    /// Supported locales in switcher order.
    locales: Vec<LocaleEntry>,
    /// Code used for unsupported input.
    default_locale: String,
}

impl LocaleRegistry {
    /// Creates a registry.
    ///
    /// If `default_locale` is not one of `locales`, the first entry becomes the default.
    #[must_use]
    pub fn new(locales: Vec<LocaleEntry>, default_locale: &str) -> Self {
        let default_locale = locales
            .iter()
            .find(|entry| entry.code == default_locale)
            .or_else(|| locales.first())
            .map_or_else(|| default_locale.to_string(), |entry| entry.code.clone());

        Self { locales, default_locale }
    }

    #[must_use]
    pub fn from_settings(settings: &SiteSettings) -> Self {
        Self::new(settings.locales.clone(), &settings.default_locale)
    }

    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// The supported locale whose code is exactly `code`.
    ///
    /// Runtime locale input is matched this way; `en_us` is not `en-US`.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&str> {
        self.locales.iter().find(|entry| entry.code == code).map(|entry| entry.code.as_str())
    }

    /// Maps a dictionary file name onto the canonical code of a supported locale.
    ///
    /// Matching ignores case and treats `_` and `-` alike (`en_gb.json` → `en-GB`).
    #[must_use]
    pub fn normalize(&self, code: &str) -> Option<&str> {
        let normalized = normalize_locale_code(code);
        self.locales
            .iter()
            .find(|entry| normalize_locale_code(&entry.code) == normalized)
            .map(|entry| entry.code.as_str())
    }

    #[must_use]
    pub fn is_supported(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    #[must_use]
    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.locales.iter().find(|entry| entry.code == code).map(|entry| entry.name.as_str())
    }

    /// Locales in switcher order.
    pub fn iter(&self) -> impl Iterator<Item = &LocaleEntry> {
        self.locales.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|entry| entry.code.as_str())
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::from_settings(&SiteSettings::default())
    }
}

/// The active locale of one session or build step.
///
/// Passed explicitly to whatever renders strings; there is no ambient locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleContext {
    /// Always a supported code.
    active: String,
}

impl LocaleContext {
    /// Starts a context on `locale`, or on the default locale when it is unsupported.
    #[must_use]
    pub fn new(registry: &LocaleRegistry, locale: &str) -> Self {
        let active = registry.get(locale).unwrap_or_else(|| registry.default_locale());
        Self { active: active.to_string() }
    }

    /// Picks the starting locale for a new session.
    ///
    /// # Priority
    /// 1. `explicit` (the locale chosen by navigation)
    /// 2. the stored preference
    /// 3. the default locale
    ///
    /// Unsupported candidates are skipped.
    #[must_use]
    pub fn negotiate(
        registry: &LocaleRegistry,
        explicit: Option<&str>,
        store: &dyn PreferenceStore,
    ) -> Self {
        if let Some(code) = explicit.and_then(|code| registry.get(code)) {
            return Self { active: code.to_string() };
        }

        if let Some(stored) = store.load()
            && let Some(code) = registry.get(&stored)
        {
            tracing::debug!(locale = code, "Using stored locale preference");
            return Self { active: code.to_string() };
        }

        Self { active: registry.default_locale().to_string() }
    }

    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Switches the active locale and persists it as the new preference.
    ///
    /// Returns `true` when the active locale changed. Unsupported codes are
    /// ignored. A failed write is logged and does not undo the switch.
    pub fn set_locale(
        &mut self,
        registry: &LocaleRegistry,
        new_locale: &str,
        store: &dyn PreferenceStore,
    ) -> bool {
        let Some(code) = registry.get(new_locale) else {
            tracing::warn!("Ignoring unsupported locale: {}", new_locale);
            return false;
        };

        if code == self.active {
            return false;
        }

        self.active = code.to_string();

        if let Err(e) = store.save(code) {
            tracing::error!("Failed to save locale preference: {}", e);
        }

        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::i18n::PreferenceError;

    /// In-memory store that records every save.
    #[derive(Default)]
    struct MemoryStore {
        stored: Mutex<Option<String>>,
        saves: Mutex<Vec<String>>,
        fail: bool,
    }

    impl MemoryStore {
        fn with(locale: &str) -> Self {
            Self { stored: Mutex::new(Some(locale.to_string())), ..Self::default() }
        }

        fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }

        fn saves(&self) -> Vec<String> {
            self.saves.lock().unwrap().clone()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.stored.lock().unwrap().clone()
        }

        fn save(&self, locale: &str) -> std::result::Result<(), PreferenceError> {
            self.saves.lock().unwrap().push(locale.to_string());
            if self.fail {
                return Err(PreferenceError::Io(std::io::Error::other("storage disabled")));
            }
            *self.stored.lock().unwrap() = Some(locale.to_string());
            Ok(())
        }
    }

    #[fixture]
    fn registry() -> LocaleRegistry {
        LocaleRegistry::default()
    }

    #[rstest]
    #[case::exact("en-US", Some("en-US"))]
    #[case::lowercase("en-us", Some("en-US"))]
    #[case::underscore("en_ZA", Some("en-ZA"))]
    #[case::short("es", Some("es"))]
    #[case::unsupported("fr", None)]
    #[case::prefix_only("en", None)]
    fn normalize_cases(
        registry: LocaleRegistry,
        #[case] code: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(registry.normalize(code), expected);
    }

    #[rstest]
    #[case::exact("en-US", Some("en-US"))]
    #[case::lowercase("en-us", None)]
    #[case::underscore("en_US", None)]
    #[case::unsupported("fr", None)]
    fn get_matches_exact_codes_only(
        registry: LocaleRegistry,
        #[case] code: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(registry.get(code), expected);
        assert_eq!(registry.is_supported(code), expected.is_some());
    }

    #[rstest]
    fn registry_lists_locales_in_order(registry: LocaleRegistry) {
        assert_that!(
            registry.codes().collect::<Vec<_>>(),
            elements_are![eq(&"en-GB"), eq(&"en-US"), eq(&"en-ZA"), eq(&"es")]
        );
        assert_that!(registry.display_name("es"), some(eq("Español")));
        assert_that!(registry.display_name("fr"), none());
        assert_that!(registry.default_locale(), eq("en-GB"));
    }

    #[rstest]
    fn registry_falls_back_to_first_locale_for_unknown_default() {
        let registry = LocaleRegistry::new(
            vec![LocaleEntry::new("es", "Español"), LocaleEntry::new("en-GB", "English (UK)")],
            "fr",
        );

        assert_that!(registry.default_locale(), eq("es"));
    }

    #[rstest]
    fn new_context_uses_default_for_unsupported(registry: LocaleRegistry) {
        assert_that!(LocaleContext::new(&registry, "de").active(), eq("en-GB"));
        assert_that!(LocaleContext::new(&registry, "ES").active(), eq("en-GB"));
        assert_that!(LocaleContext::new(&registry, "es").active(), eq("es"));
    }

    #[rstest]
    #[case::explicit_wins(Some("en-US"), Some("es"), "en-US")]
    #[case::stored_when_no_explicit(None, Some("es"), "es")]
    #[case::near_miss_explicit_skipped(Some("en_us"), None, "en-GB")]
    #[case::stored_when_explicit_unsupported(Some("fr"), Some("en-ZA"), "en-ZA")]
    #[case::default_when_stored_unsupported(None, Some("fr"), "en-GB")]
    #[case::default_when_nothing(None, None, "en-GB")]
    fn negotiate_cases(
        registry: LocaleRegistry,
        #[case] explicit: Option<&str>,
        #[case] stored: Option<&str>,
        #[case] expected: &str,
    ) {
        let store = stored.map_or_else(MemoryStore::default, MemoryStore::with);

        let context = LocaleContext::negotiate(&registry, explicit, &store);

        assert_that!(context.active(), eq(expected));
    }

    #[rstest]
    fn set_locale_switches_and_persists(registry: LocaleRegistry) {
        let store = MemoryStore::default();
        let mut context = LocaleContext::new(&registry, "en-GB");

        let changed = context.set_locale(&registry, "es", &store);

        assert_that!(changed, eq(true));
        assert_that!(context.active(), eq("es"));
        assert_that!(store.saves(), elements_are![eq("es")]);
    }

    #[rstest]
    fn set_locale_same_locale_is_noop(registry: LocaleRegistry) {
        let store = MemoryStore::default();
        let mut context = LocaleContext::new(&registry, "es");

        assert_that!(context.set_locale(&registry, "es", &store), eq(false));
        assert_that!(store.saves(), is_empty());
    }

    #[rstest]
    fn set_locale_unsupported_is_ignored(registry: LocaleRegistry) {
        let store = MemoryStore::default();
        let mut context = LocaleContext::new(&registry, "en-GB");

        assert_that!(context.set_locale(&registry, "fr", &store), eq(false));
        assert_that!(context.set_locale(&registry, "EN-us", &store), eq(false));
        assert_that!(context.active(), eq("en-GB"));
        assert_that!(store.saves(), is_empty());
    }

    #[rstest]
    fn set_locale_survives_failed_write(registry: LocaleRegistry) {
        let store = MemoryStore::failing();
        let mut context = LocaleContext::new(&registry, "en-GB");

        assert_that!(context.set_locale(&registry, "en-US", &store), eq(true));
        assert_that!(context.active(), eq("en-US"));
        assert_that!(store.load(), none());
    }
}
