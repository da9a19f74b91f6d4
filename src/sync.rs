//! HTTP client for the catalog sync endpoint.

use crate::config::SyncConfig;
use crate::constants::{SYNC_ENDPOINT_PATH, SYNC_USER_AGENT};
use crate::error::{Result, SyncError};
use crate::types::CanonicalProduct;
use std::time::Duration;
use tracing::{debug, instrument};

pub struct SyncClient {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl SyncClient {
    pub fn new(config: &SyncConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(SYNC_USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    /// POST one canonical product to the catalog. A 200 response is success
    /// and its JSON body is returned; any other status is an API error. One
    /// attempt per call, no retries.
    #[instrument(skip(self, product), fields(title = %product.title))]
    pub async fn sync_product(&self, product: &CanonicalProduct) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, SYNC_ENDPOINT_PATH);
        debug!("POST {}", url);

        let mut request = self.client.post(&url).json(product);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::OK {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(SyncError::Api {
                message: format!("sync endpoint returned HTTP {}: {}", status.as_u16(), body),
            })
        }
    }
}
