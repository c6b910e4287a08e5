//! Settings schema and validation errors.

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Name of the settings file looked up at the site root.
pub const CONFIG_FILE_NAME: &str = ".zenith-site.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "locales[1].code")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// One line per error, for the `ValidationErrors` message.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One supported locale: machine-readable code plus the name shown in the switcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleEntry {
    pub code: String,
    pub name: String,
}

impl LocaleEntry {
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into() }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Directory holding the catalogue data files, relative to the site root.
    pub data_dir: String,
    pub services_file: String,
    pub locations_file: String,

    pub translation_files: TranslationFilesConfig,
    pub key_separator: String,

    /// Closed set of supported locales, in switcher order.
    pub locales: Vec<LocaleEntry>,
    /// Used for unsupported locale codes and missing dictionaries.
    pub default_locale: String,

    /// Absolute origin used when building canonical and alternate URLs.
    pub base_url: String,

    /// Where the visitor's locale preference is persisted, relative to the site root.
    pub preference_file: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    pub file_pattern: String,
}

impl SiteSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Locale list is empty, has duplicates or misses the default locale
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        for (field, value) in [
            ("dataDir", &self.data_dir),
            ("servicesFile", &self.services_file),
            ("locationsFile", &self.locations_file),
            ("preferenceFile", &self.preference_file),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(field, "The path cannot be empty"));
            }
        }

        if self.translation_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                "The pattern cannot be empty. Example: \"locales/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.translation_files.file_pattern) {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.translation_files.file_pattern),
            ));
        }

        self.validate_locales(&mut errors);

        if self.base_url.trim().is_empty() {
            errors.push(ValidationError::new(
                "baseUrl",
                "The base URL cannot be empty. Example: \"https://example.com\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Checks codes, names, duplicates and the default locale.
    fn validate_locales(&self, errors: &mut Vec<ValidationError>) {
        if self.locales.is_empty() {
            errors.push(ValidationError::new(
                "locales",
                "At least one locale is required. Example: [{\"code\": \"en-GB\", \"name\": \"English (UK)\"}]",
            ));
            return;
        }

        let mut seen: Vec<&str> = Vec::with_capacity(self.locales.len());
        for (index, locale) in self.locales.iter().enumerate() {
            if locale.code.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("locales[{index}].code"),
                    "The locale code cannot be empty",
                ));
                continue;
            }
            if seen.iter().any(|code| code.eq_ignore_ascii_case(&locale.code)) {
                errors.push(ValidationError::new(
                    format!("locales[{index}].code"),
                    format!("Duplicate locale code '{}'", locale.code),
                ));
            }
            seen.push(&locale.code);
        }

        if !self.locales.iter().any(|l| l.code == self.default_locale) {
            errors.push(ValidationError::new(
                "defaultLocale",
                format!("Default locale '{}' is not listed in 'locales'", self.default_locale),
            ));
        }
    }
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self { file_pattern: "locales/*.json".to_string() }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            services_file: "services.json".to_string(),
            locations_file: "locations.json".to_string(),
            translation_files: TranslationFilesConfig::default(),
            key_separator: ".".to_string(),
            locales: vec![
                LocaleEntry::new("en-GB", "English (UK)"),
                LocaleEntry::new("en-US", "English (US)"),
                LocaleEntry::new("en-ZA", "English (South Africa)"),
                LocaleEntry::new("es", "Español"),
            ],
            default_locale: "en-GB".to_string(),
            base_url: "https://aetherzenith.tech".to_string(),
            preference_file: ".zenith-locale.json".to_string(),
        }
    }
}
