pub mod listings;
pub mod models;
pub mod search;

pub use search::{parse, ExplicitFields, ParsedFilters, SearchFilters};
