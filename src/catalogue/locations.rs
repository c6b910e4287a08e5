//! Location queries.

use super::{
    Catalogue,
    Location,
    LocationParams,
    distinct_values,
    find_by_id,
    rank_by_shared,
};

impl Catalogue {
    /// `None` means the page must render as not found.
    #[must_use]
    pub fn location_by_id(&self, id: &str) -> Option<&Location> {
        find_by_id(&self.locations, id)
    }

    /// One route parameter record per location, in file order.
    #[must_use]
    pub fn location_ids(&self) -> Vec<LocationParams> {
        self.locations
            .iter()
            .map(|location| LocationParams { location: location.id.clone() })
            .collect()
    }

    #[must_use]
    pub fn location_slugs(&self) -> Vec<&str> {
        self.locations.iter().map(|location| location.id.as_str()).collect()
    }

    /// Country names compare case-insensitively.
    #[must_use]
    pub fn locations_by_country(&self, country: &str) -> Vec<&Location> {
        let country = country.to_lowercase();
        self.locations.iter().filter(|location| location.country.to_lowercase() == country).collect()
    }

    #[must_use]
    pub fn locations_by_industry(&self, industry: &str) -> Vec<&Location> {
        self.locations
            .iter()
            .filter(|location| location.key_industries.iter().any(|i| i == industry))
            .collect()
    }

    #[must_use]
    pub fn locations_by_region(&self, region: &str) -> Vec<&Location> {
        self.locations.iter().filter(|location| location.region == region).collect()
    }

    #[must_use]
    pub fn all_countries(&self) -> Vec<String> {
        distinct_values(&self.locations, |location| std::iter::once(location.country.as_str()))
    }

    #[must_use]
    pub fn all_industries(&self) -> Vec<String> {
        distinct_values(&self.locations, |location| {
            location.key_industries.iter().map(String::as_str)
        })
    }

    /// Offices sharing the most key industries with `current_id`.
    #[must_use]
    pub fn related_locations(&self, current_id: &str, limit: usize) -> Vec<&Location> {
        rank_by_shared(&self.locations, current_id, limit, |location| {
            location.key_industries.as_slice()
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;
    use serde_json::json;

    use super::*;

    #[fixture]
    fn catalogue() -> Catalogue {
        let locations: Vec<Location> = serde_json::from_value(json!([
            {
                "id": "london", "name": "London", "country": "United Kingdom",
                "region": "Europe", "keyIndustries": ["Finance", "Retail"]
            },
            {
                "id": "manchester", "name": "Manchester", "country": "United Kingdom",
                "region": "Europe", "keyIndustries": ["Manufacturing"]
            },
            {
                "id": "nyc", "name": "New York", "country": "United States",
                "region": "North America", "keyIndustries": ["Finance", "Media"]
            },
            {
                "id": "cape-town", "name": "Cape Town", "country": "South Africa",
                "region": "Africa"
            }
        ]))
        .unwrap();
        Catalogue::new(Vec::new(), locations)
    }

    fn ids<'a>(locations: &[&'a Location]) -> Vec<&'a str> {
        locations.iter().map(|l| l.id.as_str()).collect()
    }

    #[rstest]
    fn every_location_id_round_trips(catalogue: Catalogue) {
        let params = catalogue.location_ids();

        assert_that!(params, len(eq(4)));
        for p in params {
            let found = catalogue.location_by_id(&p.location);
            assert_that!(found.map(|l| l.id.as_str()), some(eq(p.location.as_str())));
        }
        assert_that!(catalogue.location_by_id("paris"), none());
    }

    #[rstest]
    #[case("United Kingdom", &["london", "manchester"])]
    #[case("united kingdom", &["london", "manchester"])]
    #[case("South Africa", &["cape-town"])]
    #[case("France", &[])]
    fn locations_by_country_cases(
        catalogue: Catalogue,
        #[case] country: &str,
        #[case] expected: &[&str],
    ) {
        assert_eq!(ids(&catalogue.locations_by_country(country)), expected);
    }

    #[rstest]
    fn locations_by_industry_treats_missing_as_empty(catalogue: Catalogue) {
        assert_that!(
            ids(&catalogue.locations_by_industry("Finance")),
            elements_are![eq(&"london"), eq(&"nyc")]
        );
    }

    #[rstest]
    fn locations_by_region_is_exact(catalogue: Catalogue) {
        assert_that!(ids(&catalogue.locations_by_region("Europe")), len(eq(2)));
        assert_that!(catalogue.locations_by_region("europe"), is_empty());
    }

    #[rstest]
    fn distinct_countries_and_industries(catalogue: Catalogue) {
        assert_that!(
            catalogue.all_countries(),
            unordered_elements_are![eq("United Kingdom"), eq("United States"), eq("South Africa")]
        );
        assert_that!(
            catalogue.all_industries(),
            unordered_elements_are![eq("Finance"), eq("Retail"), eq("Manufacturing"), eq("Media")]
        );
    }

    #[rstest]
    fn related_locations_rank_shared_industries(catalogue: Catalogue) {
        let related = catalogue.related_locations("london", 2);

        assert_that!(ids(&related), elements_are![eq(&"nyc"), eq(&"manchester")]);
    }
}
