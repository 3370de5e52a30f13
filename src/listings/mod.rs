pub mod client;
pub mod config;
pub mod sample;
pub mod traits;

pub use client::ListingsClient;
pub use config::ListingsConfig;
pub use sample::{sample_listings, SampleListings};
pub use traits::ListingSource;

use anyhow::Result;

/// Pick the backend client when a URL is configured, otherwise the built-in sample catalogue.
pub fn source_from_config(config: ListingsConfig) -> Result<Box<dyn ListingSource>> {
    if config.base_url.is_some() {
        Ok(Box::new(ListingsClient::with_config(config)?))
    } else {
        Ok(Box::new(SampleListings::new(config.limit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_source_without_backend_url() {
        let source = source_from_config(ListingsConfig::default()).unwrap();
        assert_eq!(source.source_name(), "Sample listings");
    }

    #[test]
    fn test_backend_source_with_url() {
        let config = ListingsConfig {
            base_url: Some("https://api.example.com".to_string()),
            ..Default::default()
        };
        let source = source_from_config(config).unwrap();
        assert_eq!(source.source_name(), "Listings API");
    }
}
