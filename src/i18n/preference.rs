//! Persistence of the visitor's locale preference.

use std::path::{
    Path,
    PathBuf,
};

use serde_json::{
    Map,
    Value,
};

use super::PreferenceError;

/// Fixed key the active locale code is stored under.
pub const PREFERENCE_KEY: &str = "locale";

/// Durable storage for the preferred locale.
///
/// The stored value is only a hint: it is read back when a new session starts
/// and is overridden by any locale present in the navigation context.
pub trait PreferenceStore {
    /// Returns the stored locale code, if one is available.
    fn load(&self) -> Option<String>;

    /// Stores `locale` as the preferred locale.
    ///
    /// # Errors
    /// Returns error if the preference cannot be written.
    fn save(&self, locale: &str) -> Result<(), PreferenceError>;
}

/// Stores the preference as `{"locale": "<code>"}` in a JSON file.
///
/// Other keys already present in the file are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreferenceStore {
    /// JSON file holding the preference object.
    path: PathBuf,
}

impl FilePreferenceStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored JSON object, or `None` when missing or unreadable.
    fn read_object(&self) -> Option<Map<String, Value>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("No locale preference at {:?}: {}", self.path, e);
                return None;
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => {
                tracing::debug!("Ignoring locale preference file {:?}: not an object", self.path);
                None
            }
            Err(e) => {
                tracing::debug!("Ignoring unreadable locale preference {:?}: {}", self.path, e);
                None
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        self.read_object()?.get(PREFERENCE_KEY)?.as_str().map(str::to_string)
    }

    fn save(&self, locale: &str) -> Result<(), PreferenceError> {
        let mut object = self.read_object().unwrap_or_default();
        object.insert(PREFERENCE_KEY.to_string(), Value::String(locale.to_string()));

        let content = serde_json::to_string_pretty(&Value::Object(object))?;
        std::fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), locale, "Saved locale preference");

        Ok(())
    }
}
