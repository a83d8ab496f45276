//! # HTTP Client
//!
//! Thin wrapper over `reqwest::Client` that knows the base URL, turns
//! non-2xx responses into [`ApiError::Status`] and decodes JSON bodies.
//! No retries, no caching.

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Shared HTTP client for the repositories.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client with the configured base URL and timeout.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET path` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self.send(self.http.get(&url), &url).await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            error!(%url, error = %e, "Failed to decode response body");
            ApiError::Decode {
                url,
                message: e.to_string(),
            }
        })
    }

    /// Sends `body` as JSON with `method`. The response body is ignored.
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        let url = self.url(path);
        debug!(%url, %method, "Sending JSON body");

        self.send(self.http.request(method, &url).json(body), &url)
            .await?;
        Ok(())
    }

    /// `DELETE path`.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.url(path);
        debug!(%url, "DELETE");

        self.send(self.http.delete(&url), &url).await?;
        Ok(())
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| {
            error!(%url, error = %e, "HTTP request failed");
            ApiError::Http(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!(%url, status = status.as_u16(), "Request returned an error status");

        Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        })
    }
}
