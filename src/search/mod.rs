//! Free-text property search.
//!
//! [`parse`] turns a phrase like `Franklin 3 bed 2 bath 400k-800k house`
//! into [`ParsedFilters`]; [`SearchFilters::merge`] combines those with the
//! values typed into discrete form fields, explicit values winning.

pub mod filters;
pub mod parser;
pub mod price;
pub mod property_type;
pub mod rules;
pub mod tokenizer;

pub use filters::{ExplicitFields, ParsedFilters, SearchFilters, EMPTY_PARSE_HINT};
pub use parser::parse;
pub use price::normalize_price;
pub use property_type::canonical_label;
