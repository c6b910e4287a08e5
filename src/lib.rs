//! zenith-site
//!
//! Localization resolver and service/location catalogue behind a multi-locale
//! static corporate site.

pub mod catalogue;
pub mod config;
pub mod i18n;
pub mod routes;
pub mod site;

pub use catalogue::Catalogue;
pub use i18n::{
    LocaleContext,
    Params,
    Translator,
};
pub use routes::RouteManifest;
pub use site::Site;
