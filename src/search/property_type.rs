use super::tokenizer::capitalize;

/// Words recognised as a property type. Matching is exact on the lowercase token.
pub const PROPERTY_TYPE_WORDS: &[&str] = &[
    "house",
    "condo",
    "townhome",
    "townhouse",
    "land",
    "multifamily",
    "sfh",
    "duplex",
    "residential",
    "single",
];

pub fn is_property_type(word: &str) -> bool {
    PROPERTY_TYPE_WORDS.contains(&word)
}

/// Map a recognised type word to its display label.
///
/// Returns `None` for words outside [`PROPERTY_TYPE_WORDS`].
pub fn canonical_label(word: &str) -> Option<String> {
    if !is_property_type(word) {
        return None;
    }

    let label = match word {
        "sfh" | "single" => "Single Family".to_string(),
        "house" | "residential" => "Residential".to_string(),
        other => capitalize(other),
    };
    Some(label)
}
