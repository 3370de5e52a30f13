//! Smart free-text search parser.
//!
//! One pass over the tokens with a single token of lookahead. For each token
//! the rules below are tried in order and the first match wins:
//!
//! 1. count + bedroom unit (`3 bed`), consumes two tokens
//! 2. count + bathroom unit (`2 baths`), consumes two tokens
//! 3. compact bedrooms (`3bd`)
//! 4. compact bathrooms (`2ba`)
//! 5. standalone price (`450k`, `1.2m`, `$450,000`, `500`)
//! 6. property type word (`condo`, `sfh`)
//! 7. city, the first remaining place-like token
//! 8. county, the next place-like token once a city is set
//!
//! A hyphenated price range in the raw phrase is detected before the scan
//! and owns both price slots; tokens it covers are skipped.

use tracing::debug;

use super::filters::ParsedFilters;
use super::price::compare_amounts;
use super::property_type::canonical_label;
use super::rules::{
    bath_count_pair, bed_count_pair, compact_baths, compact_beds, find_price_range,
    is_place_candidate, standalone_price,
};
use super::tokenizer::{capitalize, tokenize};

/// Field a rule writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Beds,
    Baths,
    /// Next free price slot, min first
    Price,
    PropertyType,
    City,
    County,
}

/// Outcome of classifying one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Assign {
        field: Field,
        value: String,
        consumed: usize,
    },
    /// Recognised but contributes nothing (price slots already full)
    Drop,
    /// No rule matched
    Discard,
}

impl Step {
    fn consumed(&self) -> usize {
        match self {
            Step::Assign { consumed, .. } => *consumed,
            Step::Drop | Step::Discard => 1,
        }
    }
}

fn assign(field: Field, value: String, consumed: usize) -> Step {
    Step::Assign {
        field,
        value,
        consumed,
    }
}

/// Classify `token` given what has been recognised so far.
///
/// `prices_locked` is true once a range was detected or both price slots are
/// filled.
pub fn classify(
    filters: &ParsedFilters,
    prices_locked: bool,
    token: &str,
    next: Option<&str>,
) -> Step {
    if let Some(beds) = bed_count_pair(token, next) {
        return assign(Field::Beds, beds, 2);
    }
    if let Some(baths) = bath_count_pair(token, next) {
        return assign(Field::Baths, baths, 2);
    }
    if let Some(beds) = compact_beds(token) {
        return assign(Field::Beds, beds, 1);
    }
    if let Some(baths) = compact_baths(token) {
        return assign(Field::Baths, baths, 1);
    }
    if let Some(amount) = standalone_price(token) {
        if prices_locked {
            return Step::Drop;
        }
        return assign(Field::Price, amount, 1);
    }
    if let Some(label) = canonical_label(token) {
        return assign(Field::PropertyType, label, 1);
    }
    if is_place_candidate(token) {
        if filters.city.is_none() {
            return assign(Field::City, capitalize(token), 1);
        }
        if filters.county.is_none() {
            return assign(Field::County, capitalize(token), 1);
        }
    }
    Step::Discard
}

fn apply(filters: &mut ParsedFilters, field: Field, value: String) {
    match field {
        Field::Beds => filters.beds = Some(value),
        Field::Baths => filters.baths = Some(value),
        Field::PropertyType => filters.property_type = Some(value),
        Field::City => filters.city = Some(value),
        Field::County => filters.county = Some(value),
        Field::Price => {
            if filters.min_price.is_none() {
                filters.min_price = Some(value);
            } else {
                filters.max_price = Some(value);
            }
        }
    }
}

/// Parse a free-text search phrase into filters.
///
/// Never fails: an unrecognisable phrase gives an empty [`ParsedFilters`].
pub fn parse(phrase: &str) -> ParsedFilters {
    let mut filters = ParsedFilters::default();

    let range = find_price_range(phrase);
    if let Some(r) = &range {
        filters.min_price = Some(r.min.clone());
        filters.max_price = Some(r.max.clone());
    }

    let tokens: Vec<_> = tokenize(phrase)
        .into_iter()
        .filter(|t| !range.as_ref().is_some_and(|r| t.overlaps(&r.span)))
        .collect();

    let mut i = 0;
    while i < tokens.len() {
        let next = tokens.get(i + 1).map(|t| t.text.as_str());
        let prices_locked = range.is_some() || filters.max_price.is_some();
        let step = classify(&filters, prices_locked, &tokens[i].text, next);

        i += step.consumed();
        if let Step::Assign { field, value, .. } = step {
            apply(&mut filters, field, value);
        }
    }

    if let (Some(min), Some(max)) = (&filters.min_price, &filters.max_price) {
        if compare_amounts(min, max).is_gt() {
            std::mem::swap(&mut filters.min_price, &mut filters.max_price);
        }
    }

    debug!(phrase, ?filters, "parsed search phrase");
    filters
}
