// src/models/listing.rs
// DOCUMENTATION: Canonical listing shape returned to the front end
// PURPOSE: Stable JSON contract consumed by the cards and map markers

use serde::{Deserialize, Serialize};

/// One lodging after normalization
/// DOCUMENTATION: Every field is always present; optional source data
/// is replaced by its default ("" / 0 / false / [] / null)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Source record id (falls back to the slug)
    pub id: String,

    /// URL slug, used for id-or-slug lookups
    pub slug: String,

    pub title: String,

    pub short_description: String,

    pub description: String,

    /// Lowercase category key, empty when unset
    pub category: String,

    /// Map position, null unless both coordinates are known
    pub location: Option<Location>,

    /// Image URLs in source order
    pub images: Vec<String>,

    /// Starting price, 0 when unknown
    pub price_from: f64,

    pub booking_url: String,

    pub featured: bool,
}

/// Fully populated map position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub city: String,
    pub region: String,
    pub country: String,
}

/// Public response envelope for GET /api/lodgings
/// DOCUMENTATION: `total` counts matches before pagination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub total: usize,
    pub items: Vec<Listing>,
}
