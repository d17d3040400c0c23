// src/services/normalizer.rs
// DOCUMENTATION: Raw record -> canonical Listing mapping
// PURPOSE: Single pure function tolerant of every supported source shape

use crate::models::{Listing, Location, RawLodging};

/// Normalize a page of raw records, preserving order
pub fn normalize_all(items: &[RawLodging]) -> Vec<Listing> {
    items.iter().map(normalize).collect()
}

/// Map one raw record to a Listing
/// DOCUMENTATION: For each field the first present source wins:
/// - id: `sys.id` > `_id` > `id` > slug, skipping empty strings
/// - category: `category.key` or plain `category`, lowercased
/// - longitude: `location.lon` > `location.lng`
/// - city/region/country: top level > nested in `location`
/// - images: `imagesCollection.items` > `images`
/// Missing values become "" / 0 / false / [] / null.
pub fn normalize(raw: &RawLodging) -> Listing {
    let slug = raw
        .slug
        .as_ref()
        .and_then(|s| s.value())
        .unwrap_or_default()
        .to_string();

    let id = [
        raw.sys.as_ref().and_then(|sys| sys.id.as_deref()),
        raw.document_id.as_deref(),
        raw.id.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|candidate| !candidate.is_empty())
    .map(str::to_string)
    .unwrap_or_else(|| slug.clone());

    let category = raw
        .category
        .as_ref()
        .and_then(|c| c.key())
        .map(str::to_lowercase)
        .unwrap_or_default();

    Listing {
        id,
        slug,
        title: text(&raw.title),
        short_description: text(&raw.short_description),
        description: text(&raw.description),
        category,
        location: location(raw),
        images: images(raw),
        price_from: raw.price_from.filter(|p| p.is_finite()).unwrap_or(0.0),
        booking_url: text(&raw.booking_url),
        featured: raw.featured.unwrap_or(false),
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

// All-or-nothing: a location without both coordinates is dropped.
fn location(raw: &RawLodging) -> Option<Location> {
    let loc = raw.location.as_ref()?;
    let lat = loc.lat?;
    let lng = loc.lon.or(loc.lng)?;

    let part = |top: &Option<String>, nested: &Option<String>| {
        top.as_deref()
            .filter(|s| !s.is_empty())
            .or(nested.as_deref())
            .unwrap_or_default()
            .to_string()
    };

    Some(Location {
        lat,
        lng,
        city: part(&raw.city, &loc.city),
        region: part(&raw.region, &loc.region),
        country: part(&raw.country, &loc.country),
    })
}

fn images(raw: &RawLodging) -> Vec<String> {
    let entries = match (&raw.images_collection, &raw.images) {
        (Some(collection), _) => collection.items.as_slice(),
        (None, Some(images)) => images.as_slice(),
        (None, None) => &[],
    };

    entries
        .iter()
        .filter_map(|img| img.url())
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawLodging {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_record_gets_defaults() {
        let listing = normalize(&RawLodging::default());

        assert_eq!(listing.id, "");
        assert_eq!(listing.slug, "");
        assert_eq!(listing.title, "");
        assert_eq!(listing.short_description, "");
        assert_eq!(listing.description, "");
        assert_eq!(listing.category, "");
        assert!(listing.location.is_none());
        assert!(listing.images.is_empty());
        assert_eq!(listing.price_from, 0.0);
        assert_eq!(listing.booking_url, "");
        assert!(!listing.featured);

        // Every key is serialized, location as an explicit null
        let value = serde_json::to_value(&listing).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "id",
            "slug",
            "title",
            "shortDescription",
            "description",
            "category",
            "location",
            "images",
            "priceFrom",
            "bookingUrl",
            "featured",
        ] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
        assert!(obj["location"].is_null());
    }

    #[test]
    fn test_contentful_record() {
        let listing = normalize(&raw(json!({
            "sys": { "id": "cf-1" },
            "title": "Villa Océan",
            "slug": "villa-ocean",
            "shortDescription": "Vue mer",
            "category": { "key": "Surf" },
            "location": { "lat": 43.48, "lon": -1.55 },
            "city": "Biarritz",
            "region": "Nouvelle-Aquitaine",
            "country": "France",
            "imagesCollection": { "items": [
                { "url": "https://img/1.jpg" },
                { "url": "https://img/2.jpg" }
            ]},
            "priceFrom": 95.5,
            "bookingUrl": "https://book/villa",
            "featured": true
        })));

        assert_eq!(listing.id, "cf-1");
        assert_eq!(listing.slug, "villa-ocean");
        assert_eq!(listing.category, "surf");
        assert_eq!(
            listing.location,
            Some(Location {
                lat: 43.48,
                lng: -1.55,
                city: "Biarritz".to_string(),
                region: "Nouvelle-Aquitaine".to_string(),
                country: "France".to_string(),
            })
        );
        assert_eq!(listing.images, vec!["https://img/1.jpg", "https://img/2.jpg"]);
        assert_eq!(listing.price_from, 95.5);
        assert!(listing.featured);
    }

    #[test]
    fn test_sanity_record_with_nested_city() {
        let listing = normalize(&raw(json!({
            "_id": "sn-1",
            "slug": { "current": "chalet-alpin" },
            "category": "ski",
            "location": { "lat": 45.9, "lng": 6.87, "city": "Chamonix" },
            "images": ["https://img/a.jpg", { "url": "" }, { "asset": { "url": "https://img/b.jpg" } }]
        })));

        assert_eq!(listing.id, "sn-1");
        assert_eq!(listing.slug, "chalet-alpin");
        assert_eq!(listing.category, "ski");
        let loc = listing.location.unwrap();
        assert_eq!(loc.lng, 6.87);
        assert_eq!(loc.city, "Chamonix");
        assert_eq!(loc.region, "");
        assert_eq!(listing.images, vec!["https://img/a.jpg", "https://img/b.jpg"]);
    }

    #[test]
    fn test_partial_coordinates_yield_null_location() {
        let listing = normalize(&raw(json!({
            "id": "x",
            "location": { "lat": 10.0 },
            "city": "Nowhere"
        })));
        assert!(listing.location.is_none());
    }

    #[test]
    fn test_id_falls_back_to_slug() {
        let listing = normalize(&raw(json!({ "slug": "villa-abc" })));
        assert_eq!(listing.id, "villa-abc");
    }

    #[test]
    fn test_empty_ids_fall_through() {
        let listing = normalize(&raw(json!({ "sys": { "id": "" }, "_id": "sn-9" })));
        assert_eq!(listing.id, "sn-9");

        let listing = normalize(&raw(json!({ "sys": { "id": "" }, "_id": "", "id": "", "slug": "cabane" })));
        assert_eq!(listing.id, "cabane");
    }

    #[test]
    fn test_null_image_entries_ignored() {
        let listing = normalize(&raw(json!({
            "_id": "sn-3",
            "images": [null, "https://img/s.jpg"]
        })));
        assert_eq!(listing.images, vec!["https://img/s.jpg"]);

        let listing = normalize(&raw(json!({
            "sys": { "id": "cf-3" },
            "imagesCollection": { "items": [null, { "url": "https://img/c.jpg" }] }
        })));
        assert_eq!(listing.images, vec!["https://img/c.jpg"]);
    }

    #[test]
    fn test_normalized_output_reads_back() {
        let original = normalize(&raw(json!({
            "_id": "sn-2",
            "slug": "gite",
            "title": "Gîte",
            "category": "rando",
            "location": { "lat": 44.0, "lng": 3.0 },
            "city": "Millau",
            "country": "France",
            "images": ["https://img/g.jpg"],
            "priceFrom": 60
        })));

        let reread = normalize(&raw(serde_json::to_value(&original).unwrap()));
        assert_eq!(reread, original);
    }

    #[test]
    fn test_order_preserved() {
        let items = vec![
            raw(json!({ "id": "1" })),
            raw(json!({ "id": "2" })),
            raw(json!({ "id": "3" })),
        ];
        let ids: Vec<String> = normalize_all(&items).into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
