//! Listing Filter Module
//!
//! Filtering for the cached property listing. Parameters arrive as raw
//! query strings and parsing is lenient: a value that fails to parse
//! is dropped, so a bad parameter widens the result set instead of
//! failing the request.

use crate::models::{ListingQuery, Property};

// == Listing Filter ==
/// Parsed filter set for GET /properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ListingFilter {
    /// Builds the filter from raw query parameters. Empty strings count
    /// as absent and unparseable prices are dropped.
    pub fn from_params(params: &ListingQuery) -> Self {
        Self {
            location: params
                .location
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            min_price: parse_price(params.min_price.as_deref()),
            max_price: parse_price(params.max_price.as_deref()),
        }
    }

    /// Checks a single property against every active predicate.
    ///
    /// The location predicate is a case-insensitive substring match;
    /// both price bounds are inclusive.
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(location) = &self.location {
            if !property
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if property.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if property.price > max {
                return false;
            }
        }
        true
    }

    /// Returns the properties that satisfy every active predicate,
    /// preserving input order.
    pub fn apply(&self, properties: &[Property]) -> Vec<Property> {
        properties
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

fn parse_price(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn property(id: u64, price: f64, location: &str) -> Property {
        Property {
            id,
            title: format!("Listing {id}"),
            description: "test listing".to_string(),
            price,
            location: location.to_string(),
            created_at: Utc::now(),
        }
    }

    fn params(location: Option<&str>, min: Option<&str>, max: Option<&str>) -> ListingQuery {
        ListingQuery {
            location: location.map(str::to_string),
            min_price: min.map(str::to_string),
            max_price: max.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_params_keeps_everything() {
        let properties = vec![property(1, 100.0, "Lagos"), property(2, 200.0, "Abuja")];
        let filter = ListingFilter::from_params(&ListingQuery::default());

        assert_eq!(filter.apply(&properties).len(), 2);
    }

    #[test]
    fn test_location_is_case_insensitive_substring() {
        let properties = vec![
            property(1, 100.0, "Lagos Island"),
            property(2, 100.0, "Abuja"),
        ];
        let filter = ListingFilter::from_params(&params(Some("lagos"), None, None));

        let hits = filter.apply(&properties);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let properties = vec![
            property(1, 99.99, "Lagos"),
            property(2, 100.0, "Lagos"),
            property(3, 150.0, "Lagos"),
            property(4, 200.0, "Lagos"),
            property(5, 200.01, "Lagos"),
        ];
        let filter = ListingFilter::from_params(&params(None, Some("100"), Some("200")));

        let ids: Vec<u64> = filter.apply(&properties).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_unparseable_price_is_dropped() {
        let properties = vec![property(1, 100.0, "Lagos"), property(2, 9_999.0, "Lagos")];
        let filter = ListingFilter::from_params(&params(None, Some("cheap"), None));

        assert!(filter.min_price.is_none());
        assert_eq!(filter.apply(&properties).len(), 2);
    }

    #[test]
    fn test_empty_location_is_absent() {
        let filter = ListingFilter::from_params(&params(Some(""), None, None));
        assert!(filter.location.is_none());
    }

    #[test]
    fn test_contradictory_bounds_match_nothing() {
        let properties = vec![property(1, 150.0, "Lagos")];
        let filter = ListingFilter::from_params(&params(None, Some("200"), Some("100")));

        assert!(filter.apply(&properties).is_empty());
    }

    #[test]
    fn test_combined_predicates_are_anded() {
        let properties = vec![
            property(1, 100.0, "Lagos"),
            property(2, 500.0, "Lagos"),
            property(3, 100.0, "Abuja"),
        ];
        let filter = ListingFilter::from_params(&params(Some("Lagos"), Some("50"), Some("150")));

        let hits = filter.apply(&properties);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }
}
