// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Which headless content source backs the listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSourceKind {
    /// Contentful GraphQL Content Delivery API
    Contentful,
    /// Sanity GROQ query API
    Sanity,
    /// No remote source, always read the local snapshot
    None,
}

impl ContentSourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentSourceKind::Contentful => "contentful",
            ContentSourceKind::Sanity => "sanity",
            ContentSourceKind::None => "none",
        }
    }
}

/// Contentful space settings
#[derive(Debug, Clone, Default)]
pub struct ContentfulConfig {
    /// Space identifier (required)
    pub space: String,
    /// Environment alias (default "master")
    pub environment: String,
    /// Content Delivery API token (required)
    pub cda_token: String,
}

/// Sanity project settings
#[derive(Debug, Clone, Default)]
pub struct SanityConfig {
    /// Project identifier (required)
    pub project_id: String,
    /// Dataset name (default "production")
    pub dataset: String,
    /// Dated API version without the leading "v"
    pub api_version: String,
    /// Read token, only needed for private datasets
    pub read_token: Option<String>,
    /// Query the API CDN instead of the live API
    pub use_cdn: bool,
}

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup and pass it down
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8003)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Active remote content source
    pub content_source: ContentSourceKind,

    pub contentful: ContentfulConfig,

    pub sanity: SanityConfig,

    /// Path of the fallback JSON snapshot
    pub seed_path: String,

    /// Page size used when the request carries no usable limit
    pub default_limit: usize,

    /// Timeout for the outbound content source call, in seconds
    pub remote_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 8003,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            content_source: ContentSourceKind::None,
            contentful: ContentfulConfig::default(),
            sanity: SanityConfig::default(),
            seed_path: "data/seed-lodgings.json".to_string(),
            default_limit: 50,
            remote_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        let defaults = Config::default();

        let contentful = ContentfulConfig {
            space: var_or_empty("CONTENTFUL_SPACE"),
            environment: env::var("CONTENTFUL_ENV")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "master".to_string()),
            cda_token: var_or_empty("CONTENTFUL_CDA_TOKEN"),
        };

        let sanity = SanityConfig {
            project_id: var_or_empty("SANITY_API_PROJECT_ID"),
            dataset: env::var("SANITY_API_DATASET")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "production".to_string()),
            api_version: env::var("SANITY_API_VERSION")
                .unwrap_or_else(|_| "2024-08-01".to_string()),
            read_token: env::var("SANITY_API_READ_TOKEN")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            use_cdn: env::var("SANITY_USE_CDN")
                .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "no"))
                .unwrap_or(true),
        };

        let content_source = resolve_source(
            env::var("CONTENT_SOURCE").ok().as_deref(),
            &contentful,
            &sanity,
        );

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or(defaults.server_address),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8003".to_string())
                .parse()
                .unwrap_or(defaults.server_port),

            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),

            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),

            content_source,
            contentful,
            sanity,

            seed_path: env::var("SEED_PATH").unwrap_or(defaults.seed_path),

            default_limit: env::var("DEFAULT_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_limit),

            remote_timeout_secs: env::var("REMOTE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.remote_timeout_secs),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.seed_path.trim().is_empty() {
            return Err("SEED_PATH is required".to_string());
        }

        if self.content_source == ContentSourceKind::None {
            log::warn!("No content source configured - serving the local snapshot only");
        }

        Ok(())
    }
}

fn var_or_empty(key: &str) -> String {
    env::var(key).map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Pick the content source: explicit CONTENT_SOURCE wins, otherwise
/// Contentful when a space is set, then Sanity when a project is set.
fn resolve_source(
    explicit: Option<&str>,
    contentful: &ContentfulConfig,
    sanity: &SanityConfig,
) -> ContentSourceKind {
    match explicit.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("contentful") => ContentSourceKind::Contentful,
        Some("sanity") => ContentSourceKind::Sanity,
        Some("none") | Some("local") => ContentSourceKind::None,
        Some(other) if !other.is_empty() => {
            log::warn!("Unknown CONTENT_SOURCE '{}', auto-detecting", other);
            detect_source(contentful, sanity)
        }
        _ => detect_source(contentful, sanity),
    }
}

fn detect_source(contentful: &ContentfulConfig, sanity: &SanityConfig) -> ContentSourceKind {
    if !contentful.space.is_empty() {
        ContentSourceKind::Contentful
    } else if !sanity.project_id.is_empty() {
        ContentSourceKind::Sanity
    } else {
        ContentSourceKind::None
    }
}
