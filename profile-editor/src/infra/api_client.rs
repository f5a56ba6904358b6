use std::time::Duration;

use log::{debug, info, warn};
use profile_config::{ClientConfig, util::normalize_base_url};
use profile_model::MessageResponse;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

use crate::infra::errors::ApiError;

/// Thin JSON client for the profile API.
///
/// Every call resolves against a single base address. Non-success responses
/// are expected to carry `{ "message": .. }`; when they don't, the status is
/// kept and the message left empty.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiClient {
    /// Create a client without a request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, None)
    }

    /// Create a client; `None` leaves reqwest's default (no timeout).
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(&base_url.into());

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|err| {
            ApiError::Client(format!("failed to create HTTP client: {err}"))
        })?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::with_timeout(config.api_base_url.clone(), config.request_timeout)
    }

    /// Join `path` onto the base address. Absolute URLs pass through.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.base_url, p.trim_start_matches('/'))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET request returning a JSON body
    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<R, ApiError> {
        let url = self.build_url(path);
        debug!("[ApiClient] GET {}", url);
        self.execute_request(self.client.get(&url)).await
    }

    /// PUT request with a JSON body, returning a JSON body
    pub async fn put<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let url = self.build_url(path);
        debug!("[ApiClient] PUT {}", url);
        self.execute_request(self.client.put(&url).json(body)).await
    }

    /// Execute a request and map the outcome onto [`ApiError`]
    async fn execute_request<R: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<R, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            if status == StatusCode::NO_CONTENT || bytes.is_empty() {
                return Err(ApiError::MalformedResponse {
                    status: status.as_u16(),
                    reason: "empty response body".to_string(),
                });
            }
            return serde_json::from_slice(&bytes).map_err(|err| {
                warn!(
                    "[ApiClient] Unexpected body for status {}: {}",
                    status, err
                );
                ApiError::MalformedResponse {
                    status: status.as_u16(),
                    reason: err.to_string(),
                }
            });
        }

        let message = serde_json::from_slice::<MessageResponse>(&bytes)
            .ok()
            .and_then(|body| body.message);
        if message.is_none() {
            warn!(
                "[ApiClient] Error response {} without a message field",
                status
            );
        }
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}
