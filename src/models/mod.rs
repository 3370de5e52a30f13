use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a listing came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Backend,
    Sample,
}

/// Location information for a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub city: String,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default, rename = "postalCode")]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    pub source: Source,
    pub location: Location,
    pub address: String,
    /// List price in whole dollars
    pub price: i64,
    pub beds: u32,
    pub baths: f32,
    #[serde(default)]
    pub sqft: Option<i32>,
    /// Display label, e.g. "Single Family" or "Condo"
    #[serde(rename = "type")]
    pub property_type: String,
    pub status: String,
    #[serde(default)]
    pub photos: Vec<String>,
    pub url: String,
    pub listed_at: DateTime<Utc>,
    #[serde(default)]
    pub raw_data: serde_json::Value,
}
