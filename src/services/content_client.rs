// src/services/content_client.rs
// DOCUMENTATION: Remote content source selection
// PURPOSE: One entry point over the interchangeable Contentful and Sanity clients

use crate::config::{Config, ContentSourceKind};
use crate::errors::SourceError;
use crate::models::RawPage;
use crate::services::{ContentfulClient, SanityClient};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Remote query client
/// DOCUMENTATION: Built once at startup from Config. `Unconfigured`
/// answers every fetch with `SourceError::NotConfigured` without any
/// network I/O, so callers fall back deterministically.
pub enum RemoteClient {
    Contentful(ContentfulClient),
    Sanity(SanityClient),
    Unconfigured,
}

impl RemoteClient {
    /// Build the client for the configured content source
    pub fn from_config(config: &Config) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.remote_timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });

        let client = match config.content_source {
            ContentSourceKind::Contentful => {
                ContentfulClient::new(http, &config.contentful).map(RemoteClient::Contentful)
            }
            ContentSourceKind::Sanity => {
                SanityClient::new(http, &config.sanity).map(RemoteClient::Sanity)
            }
            ContentSourceKind::None => Ok(RemoteClient::Unconfigured),
        };

        client.unwrap_or_else(|e| {
            log::warn!(
                "Content source '{}' incomplete ({}), using snapshot only",
                config.content_source.as_str(),
                e
            );
            RemoteClient::Unconfigured
        })
    }

    /// Name of the active source, for logs and /health
    pub fn source_name(&self) -> &'static str {
        match self {
            RemoteClient::Contentful(_) => "contentful",
            RemoteClient::Sanity(_) => "sanity",
            RemoteClient::Unconfigured => "snapshot",
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        match self {
            RemoteClient::Contentful(client) => Some(client.endpoint()),
            RemoteClient::Sanity(client) => Some(client.endpoint()),
            RemoteClient::Unconfigured => None,
        }
    }

    /// Fetch one page of raw lodging records
    pub async fn fetch_lodgings(&self, limit: usize, skip: usize) -> Result<RawPage, SourceError> {
        match self {
            RemoteClient::Contentful(client) => client.fetch_lodgings(limit, skip).await,
            RemoteClient::Sanity(client) => client.fetch_lodgings(limit, skip).await,
            RemoteClient::Unconfigured => Err(SourceError::NotConfigured),
        }
    }
}

/// Check the status and decode a JSON body
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, SourceError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log::debug!("Content source error {}: {}", status, body);
        return Err(SourceError::Status(status.as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| SourceError::Decode(e.to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_unconfigured_never_calls_out() {
        let client = RemoteClient::from_config(&Config::default());
        assert!(matches!(client, RemoteClient::Unconfigured));
        assert_eq!(client.source_name(), "snapshot");

        let err = client.fetch_lodgings(200, 0).await.unwrap_err();
        assert!(matches!(err, SourceError::NotConfigured));
    }

    #[test]
    fn test_incomplete_source_degrades_to_unconfigured() {
        let config = Config {
            content_source: ContentSourceKind::Contentful,
            ..Config::default()
        };
        assert!(matches!(
            RemoteClient::from_config(&config),
            RemoteClient::Unconfigured
        ));
    }

    #[actix_web::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let mut config = Config::default();
        config.content_source = ContentSourceKind::Sanity;
        config.sanity.project_id = "proj".to_string();
        config.sanity.api_version = "2024-08-01".to_string();

        let client = match RemoteClient::from_config(&config) {
            RemoteClient::Sanity(c) => c.with_endpoint("http://127.0.0.1:1/query"),
            _ => panic!("expected a Sanity client"),
        };
        let err = RemoteClient::Sanity(client)
            .fetch_lodgings(10, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Transport(_)));
    }
}
