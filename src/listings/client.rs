use crate::listings::config::ListingsConfig;
use crate::listings::traits::ListingSource;
use crate::models::Listing;
use crate::search::SearchFilters;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Request};
use std::time::Duration;
use tracing::{debug, info, warn};

/// HTTP client for the hosted listing backend
pub struct ListingsClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    limit: usize,
}

impl ListingsClient {
    /// Create a client from configuration; a base URL is required
    pub fn with_config(config: ListingsConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .context("No listing backend configured (set LISTINGS_API_URL)")?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("realty-search/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
            limit: config.limit,
        })
    }

    fn listings_url(&self) -> String {
        format!("{}/listings", self.base_url.trim_end_matches('/'))
    }

    /// Build the GET request for a search without sending it
    pub fn build_request(&self, filters: &SearchFilters) -> Result<Request> {
        let mut pairs = filters.to_query_pairs();
        pairs.push(("limit", self.limit.to_string()));

        let mut builder = self.client.get(self.listings_url()).query(&pairs);
        if let Some(key) = &self.api_key {
            builder = builder.header("apikey", key).bearer_auth(key);
        }

        builder.build().context("Failed to build listing request")
    }
}

#[async_trait]
impl ListingSource for ListingsClient {
    async fn search(&self, filters: &SearchFilters) -> Result<Vec<Listing>> {
        let request = self.build_request(filters)?;
        debug!("Fetching URL: {}", request.url());

        let response = self
            .client
            .execute(request)
            .await
            .context("Failed to reach listing backend")?;

        if !response.status().is_success() {
            warn!("Listing backend returned status: {}", response.status());
            anyhow::bail!("Listing search failed: {}", response.status());
        }

        let listings: Vec<Listing> = response
            .json()
            .await
            .context("Failed to decode listing response")?;

        info!("Backend returned {} listings", listings.len());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "Listings API"
    }
}
