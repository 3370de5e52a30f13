//! Token predicates used by the smart parser.
//!
//! Each predicate looks at one lowercase token (plus the lookahead where a
//! unit word follows a count) and either captures a value or reports no
//! match. Precedence between them lives in [`super::parser`].

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use super::price::{is_digits, normalize_price};

static PRICE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\$?([0-9][0-9,]*(?:\.[0-9]+)?[km]?)\s*-\s*\$?([0-9][0-9,]*(?:\.[0-9]+)?[km]?)",
    )
    .unwrap()
});
static COMPACT_BEDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)(?:bds?|bed[a-z]*)$").unwrap());
static COMPACT_BATHS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)(?:ba|bath[a-z]*)$").unwrap());
static STANDALONE_PRICE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]+(?:\.[0-9]+)?[km]|[0-9]{3,})$").unwrap());

const BED_UNITS: &[&str] = &["bed", "beds", "bedroom", "bedrooms", "bd", "bds"];
const BATH_UNITS: &[&str] = &["bath", "baths", "bathroom", "bathrooms", "ba", "bas"];

/// A hyphenated price range found in the raw phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRange {
    pub min: String,
    pub max: String,
    /// Byte range of the match in the raw phrase
    pub span: Range<usize>,
}

/// Find the first `<num>[k|m] - <num>[k|m]` substring in the raw phrase
/// whose sides both normalize to prices.
///
/// Range-shaped counts such as `1.5-2` are skipped so a later price range
/// is still found.
pub fn find_price_range(phrase: &str) -> Option<PriceRange> {
    PRICE_RANGE.captures_iter(phrase).find_map(|caps| {
        let min = normalize_price(caps.get(1)?.as_str());
        let max = normalize_price(caps.get(2)?.as_str());
        if min.is_empty() || max.is_empty() {
            return None;
        }

        Some(PriceRange {
            min,
            max,
            span: caps.get(0)?.range(),
        })
    })
}

pub fn is_bed_unit(word: &str) -> bool {
    BED_UNITS.contains(&word)
}

pub fn is_bath_unit(word: &str) -> bool {
    BATH_UNITS.contains(&word)
}

/// `3` followed by `bed`, `bedrooms`, `bd`, ...
pub fn bed_count_pair(token: &str, next: Option<&str>) -> Option<String> {
    match next {
        Some(unit) if is_digits(token) && is_bed_unit(unit) => Some(token.to_string()),
        _ => None,
    }
}

/// `2` followed by `bath`, `bathrooms`, `ba`, ...
pub fn bath_count_pair(token: &str, next: Option<&str>) -> Option<String> {
    match next {
        Some(unit) if is_digits(token) && is_bath_unit(unit) => Some(token.to_string()),
        _ => None,
    }
}

/// `3bd`, `3bds`, `3bed`, `3bedrooms`
pub fn compact_beds(token: &str) -> Option<String> {
    COMPACT_BEDS.captures(token).map(|c| c[1].to_string())
}

/// `2ba`, `2bath`, `2baths`
pub fn compact_baths(token: &str) -> Option<String> {
    COMPACT_BATHS.captures(token).map(|c| c[1].to_string())
}

/// Price-shaped token: `450k`, `1.2m`, `$450,000`, or at least three bare digits.
///
/// Returns the normalized amount. Two-digit numbers are left alone so small
/// counts are never mistaken for prices.
pub fn standalone_price(token: &str) -> Option<String> {
    let cleaned = token.strip_prefix('$').unwrap_or(token).replace(',', "");
    if !STANDALONE_PRICE.is_match(&cleaned) {
        return None;
    }
    let amount = normalize_price(&cleaned);
    (!amount.is_empty()).then_some(amount)
}

/// Place names are anything that does not begin with a digit or `$` and is
/// not a type word.
pub fn is_place_candidate(token: &str) -> bool {
    !token.starts_with(|c: char| c.is_ascii_digit() || c == '$')
        && !super::property_type::is_property_type(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_price_range_variants() {
        let r = find_price_range("Franklin 400k-800k house").unwrap();
        assert_eq!((r.min.as_str(), r.max.as_str()), ("400000", "800000"));
        assert_eq!(r.span, 9..18);

        let r = find_price_range("$400K - $1.2M").unwrap();
        assert_eq!((r.min.as_str(), r.max.as_str()), ("400000", "1200000"));

        let r = find_price_range("350,000-500,000").unwrap();
        assert_eq!((r.min.as_str(), r.max.as_str()), ("350000", "500000"));
    }

    #[test]
    fn test_find_price_range_absent() {
        assert!(find_price_range("").is_none());
        assert!(find_price_range("Nashville 400k").is_none());
        assert!(find_price_range("Spring-Hill").is_none());
        assert!(find_price_range("2.5-3 baths").is_none());
    }

    #[test]
    fn test_find_price_range_skips_fractional_counts() {
        let r = find_price_range("land 1.5-2 acres 300k-500k").unwrap();
        assert_eq!((r.min.as_str(), r.max.as_str()), ("300000", "500000"));
        assert_eq!(r.span, 17..26);
    }

    #[test]
    fn test_count_pairs_need_bare_integer_and_unit() {
        assert_eq!(bed_count_pair("3", Some("bedrooms")).as_deref(), Some("3"));
        assert_eq!(bed_count_pair("3", Some("bds")).as_deref(), Some("3"));
        assert_eq!(bed_count_pair("3", Some("bath")), None);
        assert_eq!(bed_count_pair("3", None), None);
        assert_eq!(bed_count_pair("three", Some("bed")), None);

        assert_eq!(bath_count_pair("2", Some("ba")).as_deref(), Some("2"));
        assert_eq!(bath_count_pair("2", Some("bathrooms")).as_deref(), Some("2"));
        assert_eq!(bath_count_pair("2.5", Some("bath")), None);
    }

    #[test]
    fn test_compact_forms() {
        assert_eq!(compact_beds("3bd").as_deref(), Some("3"));
        assert_eq!(compact_beds("4bds").as_deref(), Some("4"));
        assert_eq!(compact_beds("5bedrooms").as_deref(), Some("5"));
        assert_eq!(compact_beds("3ba"), None);
        assert_eq!(compact_beds("bd"), None);

        assert_eq!(compact_baths("2ba").as_deref(), Some("2"));
        assert_eq!(compact_baths("2baths").as_deref(), Some("2"));
        assert_eq!(compact_baths("2bas"), None);
        assert_eq!(compact_baths("2bd"), None);
    }

    #[test]
    fn test_standalone_price_threshold() {
        assert_eq!(standalone_price("450k").as_deref(), Some("450000"));
        assert_eq!(standalone_price("1.2m").as_deref(), Some("1200000"));
        assert_eq!(standalone_price("$450,000").as_deref(), Some("450000"));
        assert_eq!(standalone_price("250").as_deref(), Some("250"));
        assert_eq!(standalone_price("25"), None);
        assert_eq!(standalone_price("3"), None);
        assert_eq!(standalone_price("450.5"), None);
        assert_eq!(standalone_price("37064"), Some("37064".to_string()));
    }

    #[test]
    fn test_place_candidates() {
        assert!(is_place_candidate("franklin"));
        assert!(is_place_candidate("spring-hill"));
        assert!(!is_place_candidate("3bd"));
        assert!(!is_place_candidate("condo"));
        assert!(!is_place_candidate("$45"));
    }
}
