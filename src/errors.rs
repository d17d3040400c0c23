// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::header, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Outcome of a failed remote content source call
/// DOCUMENTATION: Returned by the remote client instead of panicking.
/// Every variant is a routine condition that routes the request to the
/// local snapshot; none of them reaches the HTTP caller.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Content source not configured")]
    NotConfigured,

    #[error("Content source request failed: {0}")]
    Transport(String),

    #[error("Content source returned status {0}")]
    Status(u16),

    #[error("Content source response could not be parsed: {0}")]
    Decode(String),

    #[error("Content source query error: {0}")]
    Query(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SourceError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            SourceError::Status(status.as_u16())
        } else {
            SourceError::Transport(e.to_string())
        }
    }
}

/// Application-specific error types
/// DOCUMENTATION: Errors that escape the listing pipeline.
/// All of them surface as a generic 500 with the error message only.
#[derive(Error, Debug)]
pub enum LodgingsError {
    #[error("Fallback snapshot unavailable: {0}")]
    SnapshotUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Convert LodgingsError to HTTP response
/// DOCUMENTATION: Body is always `{ "error": true, "message": ... }`
impl ResponseError for LodgingsError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": true,
            "message": self.to_string(),
        });

        HttpResponse::build(self.status_code())
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            LodgingsError::SnapshotUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LodgingsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
