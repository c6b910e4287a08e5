//! Builds a small site on disk and exercises it end to end.

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use zenith_site::catalogue::ServiceLocationParams;
use zenith_site::config::ConfigError;
use zenith_site::i18n::PreferenceStore;
use zenith_site::{
    Params,
    Site,
};

const SERVICES: &str = r#"[
  {
    "id": "seo",
    "title": "Search Engine Optimisation",
    "shortDescription": "Be found.",
    "icon": "seo.svg",
    "categories": ["marketing", "analytics"],
    "benefits": ["More traffic"],
    "technologies": ["Lighthouse"],
    "caseStudies": [{"title": "Retailer", "description": "Doubled organic visits"}]
  },
  {
    "id": "cloud",
    "title": "Cloud Computing",
    "categories": ["infrastructure"]
  },
  {
    "id": "analytics",
    "title": "Data Analytics",
    "categories": ["analytics", "marketing", "ai"]
  },
  {
    "id": "web-dev",
    "title": "Web Development",
    "categories": ["marketing"]
  }
]"#;

const LOCATIONS: &str = r#"[
  {
    "id": "london",
    "name": "London",
    "country": "United Kingdom",
    "countryCode": "GB",
    "region": "Europe",
    "coordinates": {"lat": 51.5074, "lng": -0.1278},
    "keyIndustries": ["Finance"]
  },
  {
    "id": "new-york",
    "name": "New York",
    "country": "United States",
    "countryCode": "US",
    "region": "North America",
    "services": ["cloud", "analytics"]
  }
]"#;

const EN_GB: &str = r#"{
  "common": {"getInTouch": "Get in touch", "officeIn": "Office in {{name}}"},
  "services": {"title": "Our Services", "inLocation": "{{service}} in {{location}}"}
}"#;

const ES: &str = r#"{
  "common": {"getInTouch": "Contáctenos", "officeIn": "Oficina en {{name}}"},
  "services": {"title": "Nuestros servicios"}
}"#;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn create_site() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, ".zenith-site.json", r#"{"baseUrl": "https://example.test"}"#);
    write(root, "data/services.json", SERVICES);
    write(root, "data/locations.json", LOCATIONS);
    write(root, "locales/en-GB.json", EN_GB);
    write(root, "locales/es.json", ES);
    temp_dir
}

#[test]
fn test_catalogue_loaded_from_data_dir() {
    let temp_dir = create_site();
    let site = Site::load(temp_dir.path()).unwrap();
    let catalogue = site.catalogue();

    assert_eq!(catalogue.service_slugs(), vec!["seo", "cloud", "analytics", "web-dev"]);
    assert_eq!(catalogue.location_slugs(), vec!["london", "new-york"]);
    assert_eq!(catalogue.service_by_id("seo").unwrap().case_studies.len(), 1);
    assert!(catalogue.location_by_id("paris").is_none());
}

#[test]
fn test_related_services_rank_by_shared_categories() {
    let temp_dir = create_site();
    let site = Site::load(temp_dir.path()).unwrap();

    let related: Vec<&str> = site
        .catalogue()
        .related_services("seo", 3)
        .into_iter()
        .map(|service| service.id.as_str())
        .collect();

    assert_eq!(related, vec!["analytics", "web-dev", "cloud"]);
}

#[test]
fn test_cross_product_and_offered_paths() {
    let temp_dir = create_site();
    let site = Site::load(temp_dir.path()).unwrap();
    let catalogue = site.catalogue();

    assert_eq!(catalogue.service_location_paths().len(), 8);
    assert_eq!(
        catalogue.offered_service_location_paths(),
        vec![
            ServiceLocationParams::new("seo", "london"),
            ServiceLocationParams::new("cloud", "london"),
            ServiceLocationParams::new("cloud", "new-york"),
            ServiceLocationParams::new("analytics", "london"),
            ServiceLocationParams::new("analytics", "new-york"),
            ServiceLocationParams::new("web-dev", "london"),
        ]
    );
}

#[test]
fn test_translations_resolve_with_fallbacks() {
    let temp_dir = create_site();
    let site = Site::load(temp_dir.path()).unwrap();
    let translator = site.translator();

    assert_eq!(translator.t("es", "common.getInTouch"), "Contáctenos");
    assert_eq!(translator.t("fr", "common.getInTouch"), "Get in touch");
    assert_eq!(translator.t("en-US", "services.title"), "Our Services");
    assert_eq!(translator.t("es", "services.inLocation"), "services.inLocation");
    assert_eq!(
        translator.resolve(
            "en-GB",
            "services.inLocation",
            &Params::from([("service", "SEO"), ("location", "London")])
        ),
        "SEO in London"
    );
    assert_eq!(translator.missing_keys("es"), vec!["services.inLocation".to_string()]);
    assert_eq!(
        translator.t("ES", "common.getInTouch"),
        translator.t("en-GB", "common.getInTouch")
    );
}

#[test]
fn test_locale_preference_persists_between_sessions() {
    let temp_dir = create_site();
    let site = Site::load(temp_dir.path()).unwrap();

    let mut context = site.locale_context(None);
    assert_eq!(context.active(), "en-GB");

    assert!(context.set_locale(site.registry(), "es", &site.preference_store()));
    assert_eq!(site.preference_store().load().as_deref(), Some("es"));
    assert!(temp_dir.path().join(".zenith-locale.json").is_file());

    let next_session = site.locale_context(None);
    assert_eq!(next_session.active(), "es");
    assert_eq!(site.translator().scoped(&next_session).t("services.title"), "Nuestros servicios");

    let navigated = site.locale_context(Some("en-ZA"));
    assert_eq!(navigated.active(), "en-ZA");
}

#[test]
fn test_route_manifest_uses_configured_base_url() {
    let temp_dir = create_site();
    let site = Site::load(temp_dir.path()).unwrap();
    let manifest = site.route_manifest();

    assert_eq!(manifest.pages.len(), 5 + 4 + 2 + 8);
    let page = manifest.find("/services/cloud/new-york").unwrap();
    assert_eq!(page.routes[3].url, "https://example.test/es/services/cloud/new-york");
    assert_eq!(page.alternates[4].href, "https://example.test/services/cloud/new-york");
}

#[test]
fn test_broken_data_file_degrades_to_empty() {
    let temp_dir = create_site();
    write(temp_dir.path(), "data/locations.json", "{ not json");
    let site = Site::load(temp_dir.path()).unwrap();

    assert!(site.catalogue().locations().is_empty());
    assert!(site.catalogue().location_by_id("london").is_none());
    assert_eq!(site.catalogue().services().len(), 4);
    assert!(site.catalogue().service_location_paths().is_empty());
}

#[test]
fn test_one_bad_entity_keeps_the_rest() {
    let temp_dir = create_site();
    write(
        temp_dir.path(),
        "data/locations.json",
        r#"[
  {"id": "london", "name": "London", "country": "United Kingdom", "region": null},
  {"id": "remote", "name": "Remote", "keyIndustries": null},
  {"id": "broken", "name": "Broken", "coordinates": "nowhere"}
]"#,
    );
    let site = Site::load(temp_dir.path()).unwrap();

    assert_eq!(site.catalogue().location_slugs(), vec!["london", "remote"]);
    assert_eq!(site.catalogue().services().len(), 4);
    assert_eq!(site.catalogue().service_location_paths().len(), 8);
}

#[test]
fn test_missing_everything_still_loads() {
    let temp_dir = TempDir::new().unwrap();
    let site = Site::load(temp_dir.path()).unwrap();

    assert!(site.catalogue().services().is_empty());
    assert_eq!(site.translator().t("en-GB", "common.getInTouch"), "common.getInTouch");
    assert_eq!(site.route_manifest().pages.len(), 5);
}

#[test]
fn test_invalid_settings_are_rejected() {
    let temp_dir = create_site();
    write(temp_dir.path(), ".zenith-site.json", r#"{"defaultLocale": "fr"}"#);

    let result = Site::load(temp_dir.path());

    assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
}
