// src/services/lodging_service.rs
// DOCUMENTATION: Listing retrieval pipeline
// PURPOSE: Remote fetch -> snapshot fallback -> normalize -> filter/paginate

use crate::errors::{LodgingsError, SourceError};
use crate::models::{ListingQuery, ListingsResponse, RawPage, MAX_LIMIT};
use crate::services::{listing_filter, normalize_all, RemoteClient, SeedStore};

pub struct LodgingService;

impl LodgingService {
    /// Answer a listing query
    /// DOCUMENTATION: The remote source is asked for the first MAX_LIMIT
    /// records; filtering and pagination happen in process
    pub async fn list(
        remote: &RemoteClient,
        seed: &SeedStore,
        query: &ListingQuery,
    ) -> Result<ListingsResponse, LodgingsError> {
        let page = Self::load(remote, seed).await?;
        let listings = normalize_all(&page.items);
        let response = listing_filter::apply(listings, query);

        log::debug!(
            "Listing query {:?}: {} of {} records matched, {} returned",
            query,
            response.total,
            page.items.len(),
            response.items.len()
        );

        Ok(response)
    }

    /// Fetch raw records, falling back to the snapshot on any source error
    pub async fn load(remote: &RemoteClient, seed: &SeedStore) -> Result<RawPage, LodgingsError> {
        match remote.fetch_lodgings(MAX_LIMIT, 0).await {
            Ok(page) => Ok(page),
            Err(SourceError::NotConfigured) => {
                log::debug!("No content source, reading {}", seed.path().display());
                seed.read().await
            }
            Err(e) => {
                log::warn!(
                    "{} source failed ({}), reading {}",
                    remote.source_name(),
                    e,
                    seed.path().display()
                );
                seed.read().await
            }
        }
    }
}
