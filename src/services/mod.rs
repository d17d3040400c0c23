// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod content_client;
pub mod contentful;
pub mod listing_filter;
pub mod lodging_service;
pub mod normalizer;
pub mod sanity;
pub mod seed_store;

pub use content_client::RemoteClient;
pub use contentful::ContentfulClient;
pub use lodging_service::LodgingService;
pub use normalizer::normalize_all;
pub use sanity::SanityClient;
pub use seed_store::SeedStore;
