//! Localized route manifest for static generation.
//!
//! The default locale is served without a prefix; every other locale lives
//! under `/{code}`. Each page also carries its hreflang alternates.

use serde::Serialize;

use crate::catalogue::{
    Catalogue,
    LocationParams,
    ServiceLocationParams,
    ServiceParams,
};
use crate::i18n::LocaleRegistry;

/// Pages that exist independently of the catalogue.
pub const STATIC_PAGES: [&str; 5] = ["/", "/about", "/services", "/locations", "/contact"];

/// hreflang value of the unprefixed fallback URL.
pub const X_DEFAULT: &str = "x-default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageKind {
    Static,
    Service(ServiceParams),
    Location(LocationParams),
    ServiceLocation(ServiceLocationParams),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedRoute {
    pub locale: String,
    pub path: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub kind: PageKind,
    /// Unprefixed path, e.g. `/services/seo/london`.
    pub path: String,
    /// One route per supported locale, in registry order.
    pub routes: Vec<LocalizedRoute>,
    pub alternates: Vec<Alternate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteManifest {
    pub pages: Vec<Page>,
}

/// Prefix `path` with `locale` unless it is the default locale.
#[must_use]
pub fn localized_path(path: &str, locale: &str, registry: &LocaleRegistry) -> String {
    if locale == registry.default_locale() {
        path.to_string()
    } else if path == "/" {
        format!("/{locale}")
    } else {
        format!("/{locale}{path}")
    }
}

/// Join `base_url` and an absolute `path`; the home page maps to the bare origin.
#[must_use]
pub fn absolute_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path == "/" { base.to_string() } else { format!("{base}{path}") }
}

impl Page {
    /// One route per locale plus the hreflang alternates.
    fn new(kind: PageKind, path: String, registry: &LocaleRegistry, base_url: &str) -> Self {
        let routes: Vec<LocalizedRoute> = registry
            .codes()
            .map(|locale| {
                let localized = localized_path(&path, locale, registry);
                let url = absolute_url(base_url, &localized);
                LocalizedRoute { locale: locale.to_string(), path: localized, url }
            })
            .collect();

        let alternates = routes
            .iter()
            .map(|route| Alternate { hreflang: route.locale.clone(), href: route.url.clone() })
            .chain(std::iter::once(Alternate {
                hreflang: X_DEFAULT.to_string(),
                href: absolute_url(base_url, &path),
            }))
            .collect();

        Self { kind, path, routes, alternates }
    }
}

impl RouteManifest {
    /// Enumerate every page of the site in every supported locale.
    ///
    /// Order: static pages, service pages, location pages, then the
    /// service × location cross product.
    #[must_use]
    pub fn build(catalogue: &Catalogue, registry: &LocaleRegistry, base_url: &str) -> Self {
        let statics = STATIC_PAGES.iter().map(|path| (PageKind::Static, (*path).to_string()));

        let services = catalogue.service_ids().into_iter().map(|params| {
            let path = format!("/services/{}", params.service);
            (PageKind::Service(params), path)
        });

        let locations = catalogue.location_ids().into_iter().map(|params| {
            let path = format!("/locations/{}", params.location);
            (PageKind::Location(params), path)
        });

        let combinations = catalogue.service_location_paths().into_iter().map(|params| {
            let path = format!("/services/{}/{}", params.service, params.location);
            (PageKind::ServiceLocation(params), path)
        });

        let pages: Vec<Page> = statics
            .chain(services)
            .chain(locations)
            .chain(combinations)
            .map(|(kind, path)| Page::new(kind, path, registry, base_url))
            .collect();

        tracing::debug!(pages = pages.len(), "Route manifest built");

        Self { pages }
    }

    /// Every localized URL, page by page.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(|page| page.routes.iter().map(|route| route.url.as_str()))
    }

    #[must_use]
    pub fn find(&self, path: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.path == path)
    }
}
