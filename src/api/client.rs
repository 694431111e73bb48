//! Thin reqwest client over the post service endpoints

use crate::api::error::{ApiError, ApiResult};
use crate::api::models::{Comment, Post, ServiceBanner};
use crate::config::ApiConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Client for the post service REST API.
///
/// Every fetch is a single request/response cycle: no retry, no caching,
/// and no cancellation of in-flight requests. A request-level timeout is
/// the only bound applied.
pub struct ApiClient {
    client: Client,
    base_url: Url,
    service_url: Option<Url>,
}

impl ApiClient {
    /// Create a new client for the given endpoints
    pub fn new(
        base_url: &str,
        service_url: Option<&str>,
        request_timeout: Duration,
    ) -> ApiResult<Self> {
        let base_url = parse_endpoint(base_url)?;
        let service_url = service_url.map(parse_endpoint).transpose()?;

        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            service_url,
        })
    }

    /// Create a client from configuration
    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        Self::new(
            &config.base_url,
            config.service_url.as_deref(),
            config.request_timeout(),
        )
    }

    /// Whether an auxiliary service endpoint is configured
    pub fn has_service_endpoint(&self) -> bool {
        self.service_url.is_some()
    }

    /// Fetch a bounded list of posts (`GET /posts?_limit=<limit>`)
    pub async fn fetch_posts(&self, limit: u16) -> ApiResult<Vec<Post>> {
        let mut url = self
            .base_url
            .join("posts")
            .map_err(|e| ApiError::invalid_endpoint(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("_limit", &limit.to_string());

        self.get_json(url).await
    }

    /// Fetch the comments of a single post (`GET /posts/<id>/comments`)
    pub async fn fetch_comments(&self, post_id: i64) -> ApiResult<Vec<Comment>> {
        let url = self
            .base_url
            .join(&format!("posts/{}/comments", post_id))
            .map_err(|e| ApiError::invalid_endpoint(e.to_string()))?;

        self.get_json(url).await
    }

    /// Fetch the one-shot service banner (`GET /api/data`)
    pub async fn fetch_service_banner(&self) -> ApiResult<ServiceBanner> {
        let service_url = self
            .service_url
            .as_ref()
            .ok_or_else(|| ApiError::invalid_endpoint("no service endpoint configured"))?;
        let url = service_url
            .join("api/data")
            .map_err(|e| ApiError::invalid_endpoint(e.to_string()))?;

        self.get_json(url).await
    }

    /// Issue a GET request and decode the JSON body into `T`
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::unexpected_status(status.as_u16(), url.as_str()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ApiError::decode(e.to_string()))
    }
}

/// Parse and normalize an endpoint so relative joins resolve under it
fn parse_endpoint(raw: &str) -> ApiResult<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };

    Url::parse(&normalized).map_err(|e| ApiError::invalid_endpoint(e.to_string()))
}
