//! Discovery and loading of locale dictionary files.

use std::path::{
    Path,
    PathBuf,
};

use globset::Glob;
use ignore::WalkBuilder;
use serde_json::Value;

use super::{
    I18nError,
    LocaleRegistry,
    TranslationNode,
};

/// One parsed locale dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    /// Canonical locale code from the registry.
    pub locale: String,
    pub file_path: PathBuf,
    pub root: TranslationNode,
}

/// Detect the locale a dictionary file belongs to.
///
/// The file stem is tried first, then the parent directory name.
///
/// # Examples
/// - `locales/en-GB.json` → `en-GB`
/// - `locales/es/messages.json` → `es`
fn detect_locale_from_path<'r>(file_path: &Path, registry: &'r LocaleRegistry) -> Option<&'r str> {
    let stem = file_path.file_stem().map(|s| s.to_string_lossy());
    if let Some(code) = stem.and_then(|stem| registry.normalize(&stem)) {
        return Some(code);
    }

    let parent = file_path.parent()?.file_name()?.to_string_lossy();
    registry.normalize(&parent)
}

/// Load one dictionary file.
///
/// # Errors
/// Returns error if the file cannot be read, is not JSON, or its root is not an object.
pub fn load_dictionary_file(file_path: &Path, locale: &str) -> Result<Dictionary, I18nError> {
    let content = std::fs::read_to_string(file_path)
        .map_err(|source| I18nError::Io { path: file_path.to_path_buf(), source })?;

    let json: Value = serde_json::from_str(&content)
        .map_err(|source| I18nError::Parse { path: file_path.to_path_buf(), source })?;

    if !json.is_object() {
        return Err(I18nError::InvalidRoot(file_path.to_path_buf()));
    }

    Ok(Dictionary {
        locale: locale.to_string(),
        file_path: file_path.to_path_buf(),
        root: TranslationNode::from(json),
    })
}

/// Find and load every dictionary under `site_root` matching `file_pattern`.
///
/// Files whose locale cannot be detected, or that fail to load, are skipped
/// with a warning. When two files map to the same locale the first one in
/// path order wins.
///
/// # Errors
/// Returns error if `site_root` is not a directory or the pattern is invalid.
pub fn discover_dictionaries(
    site_root: &Path,
    file_pattern: &str,
    registry: &LocaleRegistry,
) -> Result<Vec<Dictionary>, I18nError> {
    if !site_root.is_dir() {
        return Err(I18nError::InvalidSiteRoot(site_root.to_path_buf()));
    }

    let matcher = Glob::new(file_pattern)
        .map_err(|source| I18nError::InvalidPattern { pattern: file_pattern.to_string(), source })?
        .compile_matcher();

    let mut dictionaries: Vec<Dictionary> = Vec::new();

    for result in WalkBuilder::new(site_root)
        .hidden(false)
        .git_ignore(true)
        .git_exclude(true)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(site_root) else {
            continue;
        };
        if !matcher.is_match(relative_path) {
            continue;
        }

        let Some(locale) = detect_locale_from_path(path, registry) else {
            tracing::debug!("Skipping dictionary for unsupported locale: {:?}", path);
            continue;
        };

        if dictionaries.iter().any(|d| d.locale == locale) {
            tracing::warn!("Duplicate dictionary for locale {}, ignoring {:?}", locale, path);
            continue;
        }

        match load_dictionary_file(path, locale) {
            Ok(dictionary) => {
                tracing::debug!(locale, path = %path.display(), "Loaded dictionary");
                dictionaries.push(dictionary);
            }
            Err(e) => tracing::warn!("{}", e),
        }
    }

    Ok(dictionaries)
}
