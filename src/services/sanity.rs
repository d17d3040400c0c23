// src/services/sanity.rs
// DOCUMENTATION: Sanity GROQ query API client
// PURPOSE: Fetch lodging documents from a Sanity dataset

use crate::config::SanityConfig;
use crate::errors::SourceError;
use crate::models::RawPage;
use crate::services::content_client::read_json;
use reqwest::Client;
use serde::Deserialize;

/// Most recently updated first, projected onto the raw field names
const LODGINGS_QUERY: &str = r#"{
  "total": count(*[_type == "lodging"]),
  "items": *[_type == "lodging"] | order(_updatedAt desc) [$skip...$end] {
    _id,
    title,
    "slug": slug.current,
    shortDescription,
    description,
    "category": category->key,
    location{lat, lng},
    city,
    region,
    country,
    "images": images[].asset->url,
    priceFrom,
    bookingUrl,
    featured
  }
}"#;

/// Sanity query client
/// DOCUMENTATION: Needs a project id. The read token is optional since
/// public datasets can be queried anonymously.
pub struct SanityClient {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    result: Option<RawPage>,
}

impl SanityClient {
    /// Create a client, or `NotConfigured` when no project id is set
    pub fn new(client: Client, config: &SanityConfig) -> Result<Self, SourceError> {
        if config.project_id.is_empty() {
            return Err(SourceError::NotConfigured);
        }

        let host = if config.use_cdn { "apicdn" } else { "api" };
        let dataset = if config.dataset.is_empty() {
            "production"
        } else {
            config.dataset.as_str()
        };

        Ok(Self {
            client,
            endpoint: format!(
                "https://{}.{}.sanity.io/v{}/data/query/{}",
                config.project_id,
                host,
                config.api_version.trim_start_matches('v'),
                dataset
            ),
            token: config.read_token.clone(),
        })
    }

    /// Point the client at another query endpoint
    #[cfg(test)]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch one page of lodging documents
    pub async fn fetch_lodgings(&self, limit: usize, skip: usize) -> Result<RawPage, SourceError> {
        log::debug!("Sanity lodgings query: limit={}, skip={}", limit, skip);

        // GROQ parameters are JSON literals
        let params = [
            ("query", LODGINGS_QUERY.to_string()),
            ("$skip", skip.to_string()),
            ("$end", skip.saturating_add(limit).to_string()),
        ];

        let mut request = self.client.get(&self.endpoint).query(&params);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let body: QueryResponse = read_json(response).await?;

        Ok(body.result.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::content_client::stub;
    use serde_json::json;

    fn config() -> SanityConfig {
        SanityConfig {
            project_id: "proj".to_string(),
            dataset: String::new(),
            api_version: "2024-08-01".to_string(),
            read_token: None,
            use_cdn: true,
        }
    }

    #[test]
    fn test_endpoint_construction() {
        let client = SanityClient::new(Client::new(), &config()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://proj.apicdn.sanity.io/v2024-08-01/data/query/production"
        );

        let live = SanityConfig {
            use_cdn: false,
            dataset: "staging".to_string(),
            ..config()
        };
        let client = SanityClient::new(Client::new(), &live).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://proj.api.sanity.io/v2024-08-01/data/query/staging"
        );
    }

    #[test]
    fn test_requires_project() {
        let empty = SanityConfig::default();
        assert!(matches!(
            SanityClient::new(Client::new(), &empty),
            Err(SourceError::NotConfigured)
        ));
    }

    #[actix_web::test]
    async fn test_fetch_parses_result() {
        let (url, handle) = stub::spawn(
            200,
            None,
            json!({
                "ms": 4,
                "result": {
                    "total": 7,
                    "items": [{ "_id": "doc1", "slug": "villa-abc", "category": "surf" }]
                }
            }),
        )
        .await;

        let client = SanityClient::new(Client::new(), &config())
            .unwrap()
            .with_endpoint(url);
        let page = client.fetch_lodgings(1, 0).await.unwrap();

        assert_eq!(page.total(), 7);
        assert_eq!(page.items[0].document_id.as_deref(), Some("doc1"));

        handle.stop(false).await;
    }

    #[actix_web::test]
    async fn test_server_error_is_status() {
        let (url, handle) = stub::spawn(500, None, json!({ "error": "boom" })).await;

        let client = SanityClient::new(Client::new(), &config())
            .unwrap()
            .with_endpoint(url);
        let err = client.fetch_lodgings(1, 0).await.unwrap_err();
        assert!(matches!(err, SourceError::Status(500)));

        handle.stop(false).await;
    }
}
