// src/models/raw.rs
// DOCUMENTATION: Raw lodging records as delivered by the content sources
// PURPOSE: One tolerant shape covering Contentful, Sanity and the local snapshot

use serde::{Deserialize, Deserializer, Serialize};

/// Page of raw records returned by a content source or the snapshot
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawPage {
    /// Total reported by the source; the snapshot may omit it
    #[serde(default)]
    pub total: Option<u64>,

    #[serde(default, deserialize_with = "skip_nulls")]
    pub items: Vec<RawLodging>,
}

impl RawPage {
    pub fn new(total: Option<u64>, items: Vec<RawLodging>) -> Self {
        Self { total, items }
    }

    /// Reported total, or the number of items when the source has none
    pub fn total(&self) -> u64 {
        self.total.unwrap_or(self.items.len() as u64)
    }
}

/// A lodging record in any of the supported source shapes
/// DOCUMENTATION: Every field is optional. The same concept may arrive
/// under different names (`sys.id` / `_id` / `id`, `lon` / `lng`,
/// `imagesCollection.items` / `images`); the normalizer picks the first
/// one present.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLodging {
    /// Contentful system metadata
    pub sys: Option<RawSys>,

    /// Sanity document id
    #[serde(rename = "_id")]
    pub document_id: Option<String>,

    /// Plain id (snapshot)
    pub id: Option<String>,

    pub slug: Option<RawSlug>,

    pub title: Option<String>,

    pub short_description: Option<String>,

    pub description: Option<String>,

    pub category: Option<RawCategory>,

    pub location: Option<RawLocation>,

    pub city: Option<String>,

    pub region: Option<String>,

    pub country: Option<String>,

    /// Contentful linked assets
    pub images_collection: Option<RawImagesCollection>,

    /// Sanity projected URLs or snapshot entries
    #[serde(default, deserialize_with = "optional_skip_nulls")]
    pub images: Option<Vec<RawImage>>,

    pub price_from: Option<f64>,

    pub booking_url: Option<String>,

    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawSys {
    pub id: Option<String>,
}

/// Slug as a plain string or as a Sanity `{ current }` object
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawSlug {
    Plain(String),
    Reference { current: Option<String> },
}

impl RawSlug {
    pub fn value(&self) -> Option<&str> {
        match self {
            RawSlug::Plain(s) => Some(s.as_str()),
            RawSlug::Reference { current } => current.as_deref(),
        }
    }
}

/// Category as a plain key or as a linked `{ key }` entry
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawCategory {
    Key(String),
    Reference { key: Option<String> },
}

impl RawCategory {
    pub fn key(&self) -> Option<&str> {
        match self {
            RawCategory::Key(k) => Some(k.as_str()),
            RawCategory::Reference { key } => key.as_deref(),
        }
    }
}

/// Coordinates plus optional nested address parts
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawLocation {
    pub lat: Option<f64>,
    /// Contentful spells longitude `lon`
    pub lon: Option<f64>,
    pub lng: Option<f64>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawImagesCollection {
    #[serde(default, deserialize_with = "skip_nulls")]
    pub items: Vec<RawImage>,
}

/// Image entry: a bare URL, `{ url }`, or a Sanity `{ asset: { url } }`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawImage {
    Url(String),
    Asset {
        url: Option<String>,
        asset: Option<RawAsset>,
    },
}

impl RawImage {
    pub fn url(&self) -> Option<&str> {
        match self {
            RawImage::Url(u) => Some(u.as_str()),
            RawImage::Asset { url, asset } => url
                .as_deref()
                .or_else(|| asset.as_ref().and_then(|a| a.url.as_deref())),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawAsset {
    pub url: Option<String>,
}

// Unresolved references come back as `null` entries in both CMS APIs.
fn optional_skip_nulls<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(entries.map(|v| v.into_iter().flatten().collect()))
}

fn skip_nulls<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(optional_skip_nulls(deserializer)?.unwrap_or_default())
}
