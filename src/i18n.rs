//! Localization: locale dictionaries, locale selection and key resolution.

pub mod dictionary;
pub mod loader;
pub mod locale;
pub mod preference;
pub mod translator;
mod types;

pub use dictionary::{
    Lookup,
    TranslationNode,
};
pub use loader::{
    Dictionary,
    discover_dictionaries,
    load_dictionary_file,
};
pub use locale::{
    LocaleContext,
    LocaleRegistry,
};
pub use preference::{
    FilePreferenceStore,
    PREFERENCE_KEY,
    PreferenceStore,
};
pub use translator::{
    Params,
    ScopedTranslator,
    Translator,
    interpolate,
};
pub use types::{
    I18nError,
    PreferenceError,
};
