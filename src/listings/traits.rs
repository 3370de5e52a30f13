use crate::models::Listing;
use crate::search::SearchFilters;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for anything that can answer a listing search
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch listings matching the merged filters
    async fn search(&self, filters: &SearchFilters) -> Result<Vec<Listing>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
