//! Key-path resolution against locale dictionaries.

use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;

use super::{
    Dictionary,
    LocaleContext,
    LocaleRegistry,
    Lookup,
    TranslationNode,
    discover_dictionaries,
};
use crate::config::SiteSettings;

/// Named values substituted into `{{name}}` placeholders, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.0.push((name.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
    K: Into<String>,
    V: Display,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().fold(Self::new(), |params, (name, value)| params.with(name, value))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), |params, (name, value)| params.with(name, value))
    }
}

/// Replace every `{{name}}` token in `template` with the matching parameter value.
///
/// Parameters are applied in order; the result is never looked up again.
#[must_use]
pub fn interpolate(template: &str, params: &Params) -> String {
    let mut result = template.to_string();
    for (name, value) in params.iter() {
        let token = format!("{{{{{name}}}}}");
        if result.contains(&token) {
            result = result.replace(&token, value);
        }
    }
    result
}

/// Resolves dotted keys against the loaded dictionaries.
///
/// Immutable after construction, so one instance can be shared by reference
/// across threads for the lifetime of a build.
#[derive(Debug, Clone)]
pub struct Translator {
    /// Closed locale set and default.
    registry: LocaleRegistry,
    /// Separator between key segments.
    key_separator: String,
    /// Dictionary root per canonical locale code.
    dictionaries: HashMap<String, TranslationNode>,
}

impl Translator {
    #[must_use]
    pub fn new(registry: LocaleRegistry, key_separator: impl Into<String>) -> Self {
        Self { registry, key_separator: key_separator.into(), dictionaries: HashMap::new() }
    }

    /// Builds a translator from discovered dictionaries.
    #[must_use]
    pub fn from_dictionaries(
        registry: LocaleRegistry,
        key_separator: impl Into<String>,
        dictionaries: Vec<Dictionary>,
    ) -> Self {
        dictionaries.into_iter().fold(Self::new(registry, key_separator), |mut translator, d| {
            translator.insert_dictionary(&d.locale, d.root);
            translator
        })
    }

    /// Discovers and loads every dictionary of the site.
    ///
    /// Discovery failures are logged and leave the translator without
    /// dictionaries, so every key resolves to itself.
    #[must_use]
    pub fn load(settings: &SiteSettings, site_root: &Path) -> Self {
        let registry = LocaleRegistry::from_settings(settings);
        let dictionaries = discover_dictionaries(
            site_root,
            &settings.translation_files.file_pattern,
            &registry,
        )
        .unwrap_or_else(|e| {
            tracing::error!("Failed to load translations: {}", e);
            Vec::new()
        });

        if !dictionaries.iter().any(|d| d.locale == registry.default_locale()) {
            tracing::warn!("No dictionary found for default locale {}", registry.default_locale());
        }

        Self::from_dictionaries(registry, settings.key_separator.clone(), dictionaries)
    }

    /// Adds or replaces the dictionary of `locale`.
    ///
    /// Returns `false` (and keeps nothing) when `locale` is not supported.
    pub fn insert_dictionary(&mut self, locale: &str, root: TranslationNode) -> bool {
        let Some(code) = self.registry.normalize(locale) else {
            tracing::warn!("Ignoring dictionary for unsupported locale: {}", locale);
            return false;
        };
        self.dictionaries.insert(code.to_string(), root);
        true
    }

    #[must_use]
    pub fn with_dictionary(mut self, locale: &str, root: TranslationNode) -> Self {
        self.insert_dictionary(locale, root);
        self
    }

    #[must_use]
    pub const fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Dictionary for `locale`, falling back to the default locale's.
    fn dictionary_for(&self, locale: &str) -> Option<&TranslationNode> {
        self.registry
            .get(locale)
            .and_then(|code| self.dictionaries.get(code))
            .or_else(|| self.dictionaries.get(self.registry.default_locale()))
    }

    /// Resolve `key` for `locale` and substitute `params`.
    ///
    /// A key that does not lead to a string is returned unchanged.
    #[must_use]
    pub fn resolve(&self, locale: &str, key: &str, params: &Params) -> String {
        let Some(dictionary) = self.dictionary_for(locale) else {
            tracing::warn!("No dictionary available for locale {}: {}", locale, key);
            return key.to_string();
        };

        match dictionary.lookup(key.split(self.key_separator.as_str())) {
            Lookup::Text(text) => interpolate(text, params),
            Lookup::NotText => {
                tracing::warn!("Translation value is not a string for key: {}", key);
                key.to_string()
            }
            Lookup::Missing => {
                tracing::warn!("Translation key not found: {}", key);
                key.to_string()
            }
        }
    }

    /// [`Translator::resolve`] without parameters.
    #[must_use]
    pub fn t(&self, locale: &str, key: &str) -> String {
        self.resolve(locale, key, &Params::new())
    }

    /// Keys present in the default locale but not resolvable in `locale`.
    ///
    /// Empty for unsupported locales and for the default locale itself.
    #[must_use]
    pub fn missing_keys(&self, locale: &str) -> Vec<String> {
        let default_locale = self.registry.default_locale();
        let Some(code) = self.registry.get(locale) else {
            return Vec::new();
        };
        let Some(reference) = self.dictionaries.get(default_locale) else {
            return Vec::new();
        };
        if code == default_locale {
            return Vec::new();
        }

        let reference_keys = reference.text_keys(&self.key_separator);
        let Some(dictionary) = self.dictionaries.get(code) else {
            return reference_keys.into_iter().collect();
        };

        reference_keys
            .into_iter()
            .filter(|key| {
                !matches!(
                    dictionary.lookup(key.split(self.key_separator.as_str())),
                    Lookup::Text(_)
                )
            })
            .collect()
    }

    /// Binds the translator to the active locale of `context`.
    #[must_use]
    pub fn scoped<'a>(&'a self, context: &'a LocaleContext) -> ScopedTranslator<'a> {
        ScopedTranslator { translator: self, locale: context.active() }
    }
}

/// A [`Translator`] bound to one locale.
#[derive(Debug, Clone, Copy)]
pub struct ScopedTranslator<'a> {
    /// Underlying translator.
    translator: &'a Translator,
    /// Active locale code.
    locale: &'a str,
}

impl ScopedTranslator<'_> {
    #[must_use]
    pub const fn locale(&self) -> &str {
        self.locale
    }

    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.translator.t(self.locale, key)
    }

    #[must_use]
    pub fn t_with(&self, key: &str, params: &Params) -> String {
        self.translator.resolve(self.locale, key, params)
    }
}
