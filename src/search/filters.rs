use serde::{Deserialize, Serialize};

use super::price::{compare_amounts, is_digits};
use crate::models::Listing;

/// Shown when a phrase produced no filters at all
pub const EMPTY_PARSE_HINT: &str =
    "Try something like \"Franklin 3 bed 2 bath 400k-800k house\" or fill in the fields below.";

/// Filters recognised in a free-text phrase.
///
/// Every field is optional; an all-empty value is a normal result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
}

impl ParsedFilters {
    /// True when nothing in the phrase was recognised
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Hint for the search box when the phrase yielded nothing
    pub fn hint(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_PARSE_HINT)
    }
}

/// Values typed into the discrete search fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplicitFields {
    pub city: Option<String>,
    pub county: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub beds: Option<String>,
    pub baths: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    #[serde(rename = "postalCode")]
    pub postal_code: Option<String>,
}

/// Final filter set sent to a listing source. Absent fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(rename = "postalCode", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Explicit value if non-empty, else parsed value, else nothing.
fn pick(explicit: &Option<String>, parsed: &Option<String>) -> Option<String> {
    present(explicit).or_else(|| present(parsed))
}

impl SearchFilters {
    /// Combine typed field values with what the parser found in the phrase.
    pub fn merge(explicit: &ExplicitFields, parsed: &ParsedFilters) -> Self {
        Self {
            city: pick(&explicit.city, &parsed.city),
            county: pick(&explicit.county, &parsed.county),
            postal_code: present(&explicit.postal_code),
            property_type: pick(&explicit.property_type, &parsed.property_type),
            beds: pick(&explicit.beds, &parsed.beds),
            baths: pick(&explicit.baths, &parsed.baths),
            min_price: pick(&explicit.min_price, &parsed.min_price),
            max_price: pick(&explicit.max_price, &parsed.max_price),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Query parameters for the listing endpoint, in a stable order
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("city", &self.city),
            ("county", &self.county),
            ("postalCode", &self.postal_code),
            ("type", &self.property_type),
            ("beds", &self.beds),
            ("baths", &self.baths),
            ("min_price", &self.min_price),
            ("max_price", &self.max_price),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
        .collect()
    }

    /// Whether a listing satisfies these filters.
    ///
    /// Text fields compare case-insensitively, bed/bath counts are minimums
    /// and the price range is inclusive. Numeric filters that are not plain
    /// integers are ignored.
    pub fn matches(&self, listing: &Listing) -> bool {
        let loc = &listing.location;

        text_matches(&self.city, Some(&loc.city))
            && text_matches(&self.county, loc.county.as_ref())
            && text_matches(&self.postal_code, loc.postal_code.as_ref())
            && text_matches(&self.property_type, Some(&listing.property_type))
            && at_least(&self.beds, f64::from(listing.beds))
            && at_least(&self.baths, f64::from(listing.baths))
            && price_within(&self.min_price, &self.max_price, listing.price)
    }
}

fn text_matches(filter: &Option<String>, actual: Option<&String>) -> bool {
    match filter {
        None => true,
        Some(wanted) => actual.is_some_and(|a| fold_case(a) == fold_case(wanted)),
    }
}

/// Unicode-aware case folding for place names and labels
fn fold_case(value: &str) -> String {
    value.trim().to_lowercase()
}

fn at_least(filter: &Option<String>, actual: f64) -> bool {
    match filter.as_deref().and_then(|v| v.parse::<u32>().ok()) {
        None => true,
        Some(min) => actual >= f64::from(min),
    }
}

fn price_within(min: &Option<String>, max: &Option<String>, price: i64) -> bool {
    let price = price.max(0).to_string();
    let above_min = match min.as_deref().filter(|v| is_digits(v)) {
        None => true,
        Some(m) => compare_amounts(&price, m).is_ge(),
    };
    let below_max = match max.as_deref().filter(|v| is_digits(v)) {
        None => true,
        Some(m) => compare_amounts(&price, m).is_le(),
    };
    above_min && below_max
}
