//! ResRobot HTTP client.
//!
//! Provides async methods for the two ResRobot v2.1 resources the monitor
//! needs: stop lookup (`location.name`) and trip search (`trip`).

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use super::error::ResRobotError;
use super::types::{ErrorBody, LocationResponse, TripResponse};

/// Default base URL for the ResRobot v2.1 API.
const DEFAULT_BASE_URL: &str = "https://api.resrobot.se/v2.1";

/// Configuration for the ResRobot client.
#[derive(Debug, Clone)]
pub struct ResRobotConfig {
    /// Trafiklab API key, sent as `accessId`
    pub api_key: String,
    /// Base URL for the API (defaults to production ResRobot)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ResRobotConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// ResRobot API client.
#[derive(Debug, Clone)]
pub struct ResRobotClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ResRobotClient {
    /// Create a new ResRobot client with the given configuration.
    pub fn new(config: ResRobotConfig) -> Result<Self, ResRobotError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Look up stops by name.
    ///
    /// The API matches partial names generously: almost any input returns
    /// something, best match first.
    pub async fn location_name(&self, input: &str) -> Result<LocationResponse, ResRobotError> {
        self.get("location.name", &[("input", input)]).await
    }

    /// Search for trips between two stops.
    ///
    /// # Arguments
    ///
    /// * `origin_id` - External ID of the origin stop
    /// * `dest_id` - External ID of the destination stop
    /// * `context` - `scrF` of a previous response, to fetch later trips
    pub async fn trip(
        &self,
        origin_id: &str,
        dest_id: &str,
        context: Option<&str>,
    ) -> Result<TripResponse, ResRobotError> {
        let mut params = vec![("originId", origin_id), ("destId", dest_id)];
        if let Some(context) = context {
            params.push(("context", context));
        }
        self.get("trip", &params).await
    }

    /// GET a resource and decode its JSON body.
    async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ResRobotError> {
        let url = format!("{}/{}", self.base_url, resource);

        let response = self
            .http
            .get(&url)
            .query(&[("accessId", self.api_key.as_str()), ("format", "json")])
            .query(params)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ResRobotError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ResRobotError::QuotaExceeded);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResRobotError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        debug!(resource, bytes = body.len(), "ResRobot response");
        trace!(resource, body = %body, "ResRobot response body");

        // ResRobot reports some errors in a 200 response
        if let Ok(ErrorBody {
            error_code: Some(code),
            error_text,
        }) = serde_json::from_str::<ErrorBody>(&body)
        {
            return Err(ResRobotError::ErrorCode {
                code,
                text: error_text,
            });
        }

        serde_json::from_str(&body).map_err(|e| ResRobotError::Decode {
            message: e.to_string(),
            excerpt: body.chars().take(500).collect(),
        })
    }
}
