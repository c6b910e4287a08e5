//! Service and location catalogue.
//!
//! Both collections are loaded from flat JSON arrays, validated once, and then
//! only read. Every query is a pure function of the loaded data.

mod loader;
mod locations;
mod paths;
mod query;
mod services;
mod types;

pub use loader::{
    is_url_safe,
    load_collection,
    load_locations,
    load_services,
    try_load_collection,
};
pub use paths::cross_product_paths;
pub use query::{
    Entity,
    distinct_values,
    find_by_id,
    rank_by_shared,
};
pub use services::DEFAULT_RELATED_LIMIT;
pub use types::{
    CaseStudy,
    CatalogueError,
    Coordinates,
    Location,
    LocationParams,
    Service,
    ServiceLocationParams,
    ServiceParams,
};

use crate::config::ConfigManager;

/// Load-once snapshot of both collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue {
    /// Services in file order.
    services: Vec<Service>,
    /// Locations in file order.
    locations: Vec<Location>,
}

impl Catalogue {
    #[must_use]
    pub const fn new(services: Vec<Service>, locations: Vec<Location>) -> Self {
        Self { services, locations }
    }

    /// Load both data files named by the site settings.
    ///
    /// A file that cannot be read or parsed yields an empty collection.
    #[must_use]
    pub fn load(config: &ConfigManager) -> Self {
        let (services_path, locations_path) = config.data_file_paths();
        let catalogue = Self::new(load_services(&services_path), load_locations(&locations_path));
        tracing::info!(
            services = catalogue.services.len(),
            locations = catalogue.locations.len(),
            "Catalogue loaded"
        );
        catalogue
    }

    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }
}

