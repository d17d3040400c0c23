// src/handlers/lodgings.rs
// DOCUMENTATION: HTTP handler for the listing endpoint
// PURPOSE: Parse query parameters, run the pipeline, return the JSON envelope

use crate::config::Config;
use crate::errors::LodgingsError;
use crate::models::{ListingQuery, LodgingsParams};
use crate::services::{LodgingService, RemoteClient, SeedStore};
use actix_web::{http::header, web, HttpResponse, Responder};

/// GET /api/lodgings
/// List lodgings with optional category/search/id filters
///
/// DOCUMENTATION: Always 200 on success, even for empty results. The
/// dynamic response is never cached.
pub async fn list_lodgings(
    config: web::Data<Config>,
    remote: web::Data<RemoteClient>,
    seed: web::Data<SeedStore>,
    params: web::Query<LodgingsParams>,
) -> Result<impl Responder, LodgingsError> {
    let query = ListingQuery::from_params(&params, config.default_limit);

    let result = LodgingService::list(remote.get_ref(), seed.get_ref(), &query).await?;

    Ok(HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(result))
}

/// Configuration for lodging routes
pub fn config(cfg: &mut web::ServiceConfig) {
    // Malformed query strings (e.g. a repeated key) get the error envelope too
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected listing query: {}", err);
        LodgingsError::Internal(err.to_string()).into()
    }))
    .route("/api/lodgings", web::get().to(list_lodgings))
        // Path used by the serverless deployment of the front end
        .route("/.netlify/functions/lodgings", web::get().to(list_lodgings));
}
