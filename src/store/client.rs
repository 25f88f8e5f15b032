//! HTTP client for the store lookup service

use std::time::Duration;

use reqwest::Url;
use tracing::{debug, warn};

use crate::config::{DEFAULT_TIMEOUT_MS, ResolverConfig, USER_AGENT};
use crate::store::lookup::{LookupResponse, StoreLookup};
use crate::store::platform::Platform;
use crate::version::error::LookupError;

/// Path of the version endpoint, relative to the base URL
const VERSION_PATH: &str = "api/version";

/// [`StoreLookup`] implementation backed by the remote lookup service
#[derive(Debug, Clone)]
pub struct LookupServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl LookupServiceClient {
    /// Creates a client against `base_url` with the default timeout
    pub fn new(base_url: &str) -> Result<Self, LookupError> {
        Self::with_timeout(base_url, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    /// Creates a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, LookupError> {
        Self::with_timeout(&config.base_url, Duration::from_millis(config.timeout_ms))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, platform: Platform, app_id: &str) -> Result<Url, LookupError> {
        let endpoint = format!("{}/{}", self.base_url, VERSION_PATH);
        Url::parse_with_params(
            &endpoint,
            &[("platform", platform.as_str()), ("id", app_id)],
        )
        .map_err(|e| LookupError::InvalidUrl(format!("{}: {}", endpoint, e)))
    }
}

#[async_trait::async_trait]
impl StoreLookup for LookupServiceClient {
    async fn lookup(
        &self,
        platform: Platform,
        app_id: &str,
    ) -> Result<LookupResponse, LookupError> {
        let url = self.build_url(platform, app_id)?;
        debug!("Looking up {} on {}: {}", app_id, platform.store_name(), url);

        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(LookupError::from_transport)?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(app_id.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(LookupError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("Lookup service returned status {}: {}", status, url);
            return Err(LookupError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body = response.text().await.map_err(LookupError::from_transport)?;

        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse lookup service response: {}", e);
            LookupError::InvalidResponse(e.to_string())
        })
    }
}
