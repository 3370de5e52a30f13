//! Property-based tests for the search phrase parser

use proptest::prelude::*;
use realty_search::search::{normalize_price, parse};

fn as_number(s: &str) -> u128 {
    s.parse().expect("canonical prices are integers")
}

/// Prices the way people type them: plain, with k, or with m
fn price_token() -> impl Strategy<Value = (String, u128)> {
    prop_oneof![
        (100u128..10_000_000).prop_map(|n| (n.to_string(), n)),
        (1u128..5_000).prop_map(|n| (format!("{n}k"), n * 1_000)),
        (1u128..20).prop_map(|n| (format!("{n}m"), n * 1_000_000)),
    ]
}

proptest! {
    /// Normalizing a canonical integer string changes nothing
    #[test]
    fn prop_normalization_is_idempotent(n in any::<u64>()) {
        let once = normalize_price(&n.to_string());
        prop_assert_eq!(&once, &n.to_string());
        prop_assert_eq!(normalize_price(&once), once);
    }

    /// Shorthand matches the spelled-out amount
    #[test]
    fn prop_thousands_shorthand_matches_plain(n in 1u64..1_000_000) {
        prop_assert_eq!(normalize_price(&format!("{n}k")), (n * 1_000).to_string());
    }

    /// Two standalone prices always come back ordered
    #[test]
    fn prop_standalone_prices_are_ordered((a, av) in price_token(), (b, bv) in price_token()) {
        let parsed = parse(&format!("Franklin {a} {b}"));
        let min = as_number(parsed.min_price.as_deref().unwrap());
        let max = as_number(parsed.max_price.as_deref().unwrap());

        prop_assert!(min <= max);
        prop_assert_eq!(min, av.min(bv));
        prop_assert_eq!(max, av.max(bv));
    }

    /// A hyphenated range always comes back ordered
    #[test]
    fn prop_range_prices_are_ordered(
        (a, av) in price_token(),
        (b, bv) in price_token(),
        spaced in any::<bool>(),
    ) {
        let sep = if spaced { " - " } else { "-" };
        let parsed = parse(&format!("{a}{sep}{b} condo"));

        prop_assert_eq!(as_number(parsed.min_price.as_deref().unwrap()), av.min(bv));
        prop_assert_eq!(as_number(parsed.max_price.as_deref().unwrap()), av.max(bv));
        prop_assert_eq!(parsed.property_type.as_deref(), Some("Condo"));
        prop_assert!(parsed.city.is_none());
    }

    /// Arbitrary input never panics, and a county never appears without a city
    #[test]
    fn prop_any_phrase_parses(phrase in ".{0,80}") {
        let parsed = parse(&phrase);
        if parsed.county.is_some() {
            prop_assert!(parsed.city.is_some());
        }
    }

    /// Case does not change the result
    #[test]
    fn prop_case_insensitive(phrase in "[a-zA-Z0-9 ]{0,40}") {
        prop_assert_eq!(parse(&phrase.to_uppercase()), parse(&phrase.to_lowercase()));
    }
}
