//! Service queries.

use super::{
    Catalogue,
    Service,
    ServiceParams,
    distinct_values,
    find_by_id,
    rank_by_shared,
};

/// Related services shown on a service page by default.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

impl Catalogue {
    /// `None` means the page must render as not found.
    #[must_use]
    pub fn service_by_id(&self, id: &str) -> Option<&Service> {
        find_by_id(&self.services, id)
    }

    /// One route parameter record per service, in file order.
    #[must_use]
    pub fn service_ids(&self) -> Vec<ServiceParams> {
        self.services.iter().map(|service| ServiceParams { service: service.id.clone() }).collect()
    }

    #[must_use]
    pub fn service_slugs(&self) -> Vec<&str> {
        self.services.iter().map(|service| service.id.as_str()).collect()
    }

    #[must_use]
    pub fn services_by_category(&self, category: &str) -> Vec<&Service> {
        self.services
            .iter()
            .filter(|service| service.categories.iter().any(|c| c == category))
            .collect()
    }

    #[must_use]
    pub fn all_service_categories(&self) -> Vec<String> {
        distinct_values(&self.services, |service| service.categories.iter().map(String::as_str))
    }

    /// Services sharing the most categories with `current_id`.
    #[must_use]
    pub fn related_services(&self, current_id: &str, limit: usize) -> Vec<&Service> {
        rank_by_shared(&self.services, current_id, limit, |service| service.categories.as_slice())
    }
}
