//! Shared HTTP plumbing for the WMATA API.
//!
//! Both the rail and bus clients build on the same GET-and-decode core:
//! api-key header authentication, a semaphore bounding concurrent
//! requests, and status-code triage before JSON decoding.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;

use super::error::ApiError;

/// Default base URL for the WMATA API.
const DEFAULT_BASE_URL: &str = "https://api.wmata.com";

/// Default maximum concurrent requests.
///
/// The default API tier allows ten calls per second; staying at or below
/// that concurrency avoids tripping the rate limiter on bursts.
const DEFAULT_MAX_CONCURRENT: usize = 10;

/// Configuration for the WMATA API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API key sent in the `api_key` header
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// A circular search area for endpoints that filter by location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusSearch {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in meters.
    pub radius: u32,
}

impl RadiusSearch {
    /// Create a search area centered on the given coordinates.
    pub fn new(latitude: f64, longitude: f64, radius: u32) -> Self {
        Self {
            latitude,
            longitude,
            radius,
        }
    }

    pub(crate) fn push_query(&self, query: &mut Vec<(&'static str, String)>) {
        query.push(("Lat", self.latitude.to_string()));
        query.push(("Lon", self.longitude.to_string()));
        query.push(("Radius", self.radius.to_string()));
    }
}

/// WMATA API transport.
///
/// Owns the HTTP connection pool and the request semaphore. The rail and
/// bus clients wrap this with typed endpoint methods.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();

        // WMATA authenticates with a plain api_key header
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| ApiError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("api_key"), api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// GET a path and decode the JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let _permit = self.semaphore.acquire().await.map_err(|_| ApiError::Api {
            status: 0,
            message: "Semaphore closed".to_string(),
        })?;

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ApiError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ApiError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = ApiConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_max_concurrent(4)
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.max_concurrent, 4);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = ApiConfig::new("test-key");

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        let client = ApiClient::new(ApiConfig::new("test-key"));
        assert!(client.is_ok());
    }

    #[test]
    fn radius_search_query() {
        let mut query = Vec::new();
        RadiusSearch::new(38.8977, -77.0365, 500).push_query(&mut query);

        assert_eq!(query.len(), 3);
        assert_eq!(query[0], ("Lat", "38.8977".to_string()));
        assert_eq!(query[2], ("Radius", "500".to_string()));
    }
}
