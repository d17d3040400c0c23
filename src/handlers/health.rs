// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Simple endpoint to verify service status

use crate::services::RemoteClient;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub async fn health_check(remote: web::Data<RemoteClient>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "hobivia-lodgings",
        "version": env!("CARGO_PKG_VERSION"),
        "source": remote.source_name()
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
