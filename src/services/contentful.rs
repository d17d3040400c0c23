// src/services/contentful.rs
// DOCUMENTATION: Contentful GraphQL Content Delivery API client
// PURPOSE: Fetch lodging entries from a Contentful space

use crate::config::ContentfulConfig;
use crate::errors::SourceError;
use crate::models::RawPage;
use crate::services::content_client::read_json;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

const GRAPHQL_BASE_URL: &str = "https://graphql.contentful.com/content/v1/spaces";

/// Newest publications first; at most 10 images per entry
const LODGINGS_QUERY: &str = r#"
query Lodgings($limit: Int!, $skip: Int!) {
  lodgingCollection(limit: $limit, skip: $skip, order: sys_publishedAt_DESC) {
    total
    items {
      sys { id }
      title
      slug
      shortDescription
      description
      category { key }
      location { lat lon }
      city
      region
      country
      imagesCollection(limit: 10) { items { url(transform: { quality: 75 }) } }
      priceFrom
      bookingUrl
      featured
    }
  }
}"#;

/// Contentful GraphQL client
/// DOCUMENTATION: Needs a space id and a CDA token; the environment
/// defaults to "master"
pub struct ContentfulClient {
    client: Client,
    endpoint: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<LodgingsData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LodgingsData {
    lodging_collection: Option<RawPage>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

impl ContentfulClient {
    /// Create a client, or `NotConfigured` when space or token is missing
    pub fn new(client: Client, config: &ContentfulConfig) -> Result<Self, SourceError> {
        if config.space.is_empty() || config.cda_token.is_empty() {
            return Err(SourceError::NotConfigured);
        }

        let environment = if config.environment.is_empty() {
            "master"
        } else {
            config.environment.as_str()
        };

        Ok(Self {
            client,
            endpoint: format!(
                "{}/{}/environments/{}",
                GRAPHQL_BASE_URL, config.space, environment
            ),
            token: config.cda_token.clone(),
        })
    }

    /// Point the client at another GraphQL endpoint
    #[cfg(test)]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch one page of lodging entries
    pub async fn fetch_lodgings(&self, limit: usize, skip: usize) -> Result<RawPage, SourceError> {
        log::debug!(
            "Contentful lodgings query: limit={}, skip={}",
            limit,
            skip
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&json!({
                "query": LODGINGS_QUERY,
                "variables": { "limit": limit, "skip": skip },
            }))
            .send()
            .await?;

        let body: GraphQlResponse = read_json(response).await?;
        let GraphQlResponse { data, errors } = body;
        let messages = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");

        match data {
            Some(data) => {
                if !errors.is_empty() {
                    log::warn!("Contentful returned partial data: {}", messages);
                }
                let page = data.lodging_collection.unwrap_or_default();
                Ok(RawPage::new(Some(page.total.unwrap_or(0)), page.items))
            }
            None if !errors.is_empty() => Err(SourceError::Query(messages)),
            None => Err(SourceError::Decode("response has no data".to_string())),
        }
    }
}
