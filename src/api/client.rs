//! Minimal HTTP client for the backup service API

use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::api::ApiError;
use crate::config::http;
use crate::error::Result;

/// Backend API client
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (e.g. `http://host/api/v1`)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(http::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(http::REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Build the URL for an API path; absolute URLs pass through
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET a JSON document
    ///
    /// Non-success statuses come back as an [`ApiError`] that still holds
    /// the response, so its body can be shown to the user.
    pub async fn get_json(&self, path: &str) -> std::result::Result<Value, ApiError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::from_response(response));
        }
        Ok(response.json().await?)
    }
}
