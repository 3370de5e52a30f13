use crate::listings::traits::ListingSource;
use crate::models::{Listing, Location, Source};
use crate::search::SearchFilters;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use tracing::{debug, info};

/// In-memory listing catalogue, used when no backend is configured
pub struct SampleListings {
    listings: Vec<Listing>,
    limit: usize,
}

impl SampleListings {
    pub fn new(limit: usize) -> Self {
        Self {
            listings: sample_listings(),
            limit,
        }
    }

    /// Serve a caller-provided catalogue instead of the built-in one
    pub fn from_listings(listings: Vec<Listing>, limit: usize) -> Self {
        Self { listings, limit }
    }
}

#[async_trait]
impl ListingSource for SampleListings {
    async fn search(&self, filters: &SearchFilters) -> Result<Vec<Listing>> {
        debug!(?filters, "Filtering {} sample listings", self.listings.len());

        let found: Vec<Listing> = self
            .listings
            .iter()
            .filter(|listing| filters.matches(listing))
            .take(self.limit)
            .cloned()
            .collect();

        info!("📋 {} sample listings match", found.len());
        Ok(found)
    }

    fn source_name(&self) -> &'static str {
        "Sample listings"
    }
}

fn listed(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 15, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// `place` is (city, county, postal code); `size` is (beds, baths, sqft)
fn sample(
    id: &str,
    address: &str,
    place: (&str, &str, &str),
    property_type: &str,
    price: i64,
    size: (u32, f32, i32),
    listed_at: DateTime<Utc>,
) -> Listing {
    let (city, county, postal_code) = place;
    let (beds, baths, sqft) = size;

    Listing {
        id: id.to_string(),
        source: Source::Sample,
        location: Location {
            city: city.to_string(),
            county: Some(county.to_string()),
            postal_code: Some(postal_code.to_string()),
            latitude: None,
            longitude: None,
        },
        address: address.to_string(),
        price,
        beds,
        baths,
        sqft: Some(sqft),
        property_type: property_type.to_string(),
        status: "Active".to_string(),
        photos: vec![],
        url: format!("https://listings.example.com/{}", id),
        listed_at,
        raw_data: json!({ "sample": true }),
    }
}

/// Built-in Middle Tennessee listings
pub fn sample_listings() -> Vec<Listing> {
    vec![
        sample(
            "sample_franklin_1",
            "412 Evans St",
            ("Franklin", "Williamson", "37064"),
            "Residential",
            685_000,
            (4, 2.5, 2_640),
            listed(2026, 9, 30),
        ),
        sample(
            "sample_franklin_2",
            "1207 Carlisle Ln",
            ("Franklin", "Williamson", "37064"),
            "Single Family",
            529_900,
            (3, 2.0, 1_910),
            listed(2026, 10, 2),
        ),
        sample(
            "sample_franklin_3",
            "88 Cool Springs Blvd #204",
            ("Franklin", "Williamson", "37067"),
            "Condo",
            349_000,
            (2, 2.0, 1_180),
            listed(2026, 10, 5),
        ),
        sample(
            "sample_nashville_1",
            "1600 Division St #512",
            ("Nashville", "Davidson", "37203"),
            "Condo",
            415_000,
            (1, 1.0, 820),
            listed(2026, 9, 21),
        ),
        sample(
            "sample_nashville_2",
            "2214 Eastland Ave",
            ("Nashville", "Davidson", "37206"),
            "Residential",
            799_000,
            (3, 3.0, 2_150),
            listed(2026, 10, 9),
        ),
        sample(
            "sample_nashville_3",
            "905 Gallatin Pike",
            ("Nashville", "Davidson", "37206"),
            "Duplex",
            1_150_000,
            (6, 4.0, 3_400),
            listed(2026, 8, 28),
        ),
        sample(
            "sample_brentwood_1",
            "9 Wildwood Ct",
            ("Brentwood", "Williamson", "37027"),
            "Single Family",
            1_895_000,
            (5, 4.5, 4_820),
            listed(2026, 10, 11),
        ),
        sample(
            "sample_murfreesboro_1",
            "3310 Memorial Blvd",
            ("Murfreesboro", "Rutherford", "37129"),
            "Townhome",
            289_900,
            (3, 2.5, 1_560),
            listed(2026, 9, 17),
        ),
        sample(
            "sample_spring_hill_1",
            "0 Kedron Rd",
            ("Spring Hill", "Maury", "37174"),
            "Land",
            240_000,
            (0, 0.0, 0),
            listed(2026, 7, 30),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[tokio::test]
    async fn test_unfiltered_search_respects_limit() {
        let source = SampleListings::new(3);
        let found = source.search(&SearchFilters::default()).await.unwrap();
        assert_eq!(found.len(), 3);
    }

    #[tokio::test]
    async fn test_filters_by_city_and_type() {
        let source = SampleListings::new(24);
        let filters = SearchFilters {
            city: some("Nashville"),
            property_type: some("Condo"),
            ..Default::default()
        };

        let found = source.search(&filters).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "sample_nashville_1");
        assert_eq!(found[0].source, Source::Sample);
    }

    #[tokio::test]
    async fn test_price_range_is_inclusive() {
        let source = SampleListings::new(24);
        let filters = SearchFilters {
            min_price: some("349000"),
            max_price: some("415000"),
            ..Default::default()
        };

        let mut ids: Vec<_> = source
            .search(&filters)
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["sample_franklin_3", "sample_nashville_1"]);
    }

    #[tokio::test]
    async fn test_custom_catalogue() {
        let source = SampleListings::from_listings(vec![], 10);
        let found = source.search(&SearchFilters::default()).await.unwrap();
        assert!(found.is_empty());
        assert_eq!(source.source_name(), "Sample listings");
    }
}
