//! Static path enumeration for service × location pages.

use super::{
    Catalogue,
    ServiceLocationParams,
};

/// The full cartesian product of `service_ids` × `location_ids`.
///
/// Service-major: for each service every location is visited in order. No pair
/// is filtered out; whether a pair has meaningful content is decided at render
/// time.
#[must_use]
pub fn cross_product_paths<S, L>(service_ids: &[S], location_ids: &[L]) -> Vec<ServiceLocationParams>
where
    S: AsRef<str>,
    L: AsRef<str>,
{
    let mut paths = Vec::with_capacity(service_ids.len().saturating_mul(location_ids.len()));
    for service in service_ids {
        for location in location_ids {
            paths.push(ServiceLocationParams::new(service.as_ref(), location.as_ref()));
        }
    }
    paths
}

impl Catalogue {
    /// Every `/services/{service}/{location}` page of the catalogue.
    #[must_use]
    pub fn service_location_paths(&self) -> Vec<ServiceLocationParams> {
        cross_product_paths(&self.service_slugs(), &self.location_slugs())
    }

    /// Like [`Catalogue::service_location_paths`], but skips pairs whose
    /// location lists the services it offers and does not list this one.
    #[must_use]
    pub fn offered_service_location_paths(&self) -> Vec<ServiceLocationParams> {
        self.services
            .iter()
            .flat_map(|service| {
                self.locations
                    .iter()
                    .filter(|location| location.offers(&service.id))
                    .map(|location| ServiceLocationParams::new(&service.id, &location.id))
            })
            .collect()
    }
}
