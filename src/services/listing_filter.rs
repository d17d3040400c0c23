// src/services/listing_filter.rs
// DOCUMENTATION: In-process filtering and pagination of normalized listings
// PURPOSE: Id lookup, category and free-text filters, page slicing

use crate::models::{Listing, ListingQuery, ListingsResponse};

/// Apply a listing query to normalized listings
/// DOCUMENTATION: Id lookups bypass every other filter. Otherwise
/// `total` is counted after category/search and before slicing.
pub fn apply(listings: Vec<Listing>, query: &ListingQuery) -> ListingsResponse {
    match query {
        ListingQuery::ById(id) => find_by_id(listings, id),
        ListingQuery::Filtered {
            category,
            search,
            limit,
            skip,
        } => {
            let filtered: Vec<Listing> = listings
                .into_iter()
                .filter(|l| matches_category(l, category.as_deref()))
                .filter(|l| matches_search(l, search.as_deref()))
                .collect();

            let total = filtered.len();
            let items = filtered.into_iter().skip(*skip).take(*limit).collect();

            ListingsResponse { total, items }
        }
    }
}

/// Exact, case-sensitive match on id or slug
pub fn find_by_id(listings: Vec<Listing>, id: &str) -> ListingsResponse {
    let items: Vec<Listing> = listings
        .into_iter()
        .filter(|l| l.id == id || (!l.slug.is_empty() && l.slug == id))
        .collect();

    ListingsResponse {
        total: items.len(),
        items,
    }
}

fn matches_category(listing: &Listing, category: Option<&str>) -> bool {
    match category {
        Some(wanted) => listing.category.to_lowercase() == wanted.to_lowercase(),
        None => true,
    }
}

fn matches_search(listing: &Listing, term: Option<&str>) -> bool {
    let Some(term) = term else {
        return true;
    };

    let city = listing
        .location
        .as_ref()
        .map(|loc| loc.city.as_str())
        .unwrap_or_default();

    format!("{} {} {}", listing.title, listing.short_description, city)
        .to_lowercase()
        .contains(&term.to_lowercase())
}
