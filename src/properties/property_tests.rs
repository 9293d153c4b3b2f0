//! Property-based tests for the listing filter and pagination engine.
//!
//! These verify the invariants that must hold for every input: page
//! parameters always land in range, pagination never loses or invents
//! records, and filtered results satisfy their predicates.

use proptest::prelude::*;

use crate::models::{ListingQuery, Property};
use crate::properties::filter::ListingFilter;
use crate::properties::page::{
    page_from_raw, paginate, per_page_from_raw, PageParams, MAX_PER_PAGE, MIN_PER_PAGE,
};
use crate::properties::service;

// == Strategies ==
fn arbitrary_raw_param() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        any::<i64>().prop_map(|n| Some(n.to_string())),
        any::<f64>().prop_map(|f| Some(f.to_string())),
        "[a-zA-Z !.#-]{0,8}".prop_map(Some),
    ]
}

fn arbitrary_properties() -> impl Strategy<Value = Vec<Property>> {
    let location = prop_oneof![
        Just("Lagos"),
        Just("Lagos Island"),
        Just("Abuja"),
        Just("Lekki"),
    ];
    prop::collection::vec((0.0f64..10_000.0, location), 0..120).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (price, location))| Property {
                id: i as u64 + 1,
                title: format!("Listing {}", i + 1),
                description: String::new(),
                price,
                location: location.to_string(),
                created_at: chrono::Utc::now(),
            })
            .collect()
    })
}

proptest! {
    // == Parameter Parsing ==
    #[test]
    fn per_page_always_lands_in_bounds(raw in arbitrary_raw_param()) {
        let per_page = per_page_from_raw(raw.as_deref());
        prop_assert!((MIN_PER_PAGE..=MAX_PER_PAGE).contains(&per_page));
    }

    #[test]
    fn numeric_per_page_clamps_exactly(n in any::<i64>()) {
        let per_page = per_page_from_raw(Some(&n.to_string()));
        prop_assert_eq!(per_page as i64, n.clamp(1, 100));
    }

    #[test]
    fn page_token_is_always_positive(raw in arbitrary_raw_param()) {
        prop_assert!(page_from_raw(raw.as_deref()) >= 1);
    }

    // == Pagination ==
    #[test]
    fn paginate_envelope_is_consistent(
        properties in arbitrary_properties(),
        page in 1u64..60,
        per_page in 1u32..=100,
    ) {
        let result = paginate(&properties, PageParams { page, per_page });

        prop_assert_eq!(result.count, properties.len());
        prop_assert!(result.total_pages >= 1);
        prop_assert!(result.current_page >= 1);
        prop_assert!(result.current_page <= result.total_pages);
        prop_assert!(result.data.len() <= per_page as usize);
        prop_assert_eq!(result.next, result.current_page < result.total_pages);
        prop_assert_eq!(result.previous, result.current_page > 1);
        // Items served through this page never exceed page capacity.
        let served = (result.current_page - 1) * per_page as usize + result.data.len();
        prop_assert!(result.current_page * per_page as usize >= served);
    }

    #[test]
    fn walking_all_pages_covers_the_collection(
        properties in arbitrary_properties(),
        per_page in 1u32..=100,
    ) {
        let first = paginate(&properties, PageParams { page: 1, per_page });

        let mut seen = Vec::new();
        for page_no in 1..=first.total_pages {
            let page = paginate(&properties, PageParams { page: page_no as u64, per_page });
            seen.extend(page.data.iter().map(|p| p.id));
        }

        let expected: Vec<u64> = properties.iter().map(|p| p.id).collect();
        prop_assert_eq!(seen, expected);
    }

    // == Filtering ==
    #[test]
    fn filtered_results_satisfy_their_predicates(
        properties in arbitrary_properties(),
        min in 0.0f64..10_000.0,
        max in 0.0f64..10_000.0,
    ) {
        let params = ListingQuery {
            location: Some("lag".to_string()),
            min_price: Some(min.to_string()),
            max_price: Some(max.to_string()),
            ..Default::default()
        };
        let filter = ListingFilter::from_params(&params);

        for hit in filter.apply(&properties) {
            prop_assert!(hit.location.to_lowercase().contains("lag"));
            prop_assert!(hit.price >= min);
            prop_assert!(hit.price <= max);
        }
    }

    #[test]
    fn filter_preserves_order_and_never_invents(
        properties in arbitrary_properties(),
        min in arbitrary_raw_param(),
        max in arbitrary_raw_param(),
    ) {
        let params = ListingQuery {
            min_price: min,
            max_price: max,
            ..Default::default()
        };
        let hits = ListingFilter::from_params(&params).apply(&properties);

        prop_assert!(hits.len() <= properties.len());
        prop_assert!(hits.windows(2).all(|w| w[0].id < w[1].id));
    }

    // == Full Read Path ==
    #[test]
    fn listing_apply_never_panics_and_stays_valid(
        properties in arbitrary_properties(),
        location in arbitrary_raw_param(),
        min in arbitrary_raw_param(),
        max in arbitrary_raw_param(),
        page in arbitrary_raw_param(),
        per_page in arbitrary_raw_param(),
    ) {
        let params = ListingQuery { location, min_price: min, max_price: max, page, per_page };
        let result = service::apply(&properties, &params);

        prop_assert!(result.count <= properties.len());
        prop_assert!(result.total_pages >= 1);
        prop_assert!(result.current_page <= result.total_pages);
        prop_assert!(result.data.len() <= result.per_page as usize);
        prop_assert!((MIN_PER_PAGE..=MAX_PER_PAGE).contains(&result.per_page));
    }
}
