use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_URL, DEFAULT_TOAST_DURATION, DEFAULT_USERNAME};

/// Which keys the update request carries.
///
/// The original web client destructured `mobile` and `profile` out of form
/// state that only has `mobileNumber`, so neither key ever reached the
/// server. `Legacy` reproduces that payload byte for byte; `Complete` sends
/// the typed mobile number under `mobile`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdatePayloadMode {
    #[default]
    Legacy,
    Complete,
}

impl UpdatePayloadMode {
    /// Name as accepted by the environment and the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for UpdatePayloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdatePayloadMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "complete" => Ok(Self::Complete),
            other => Err(format!(
                "expected 'legacy' or 'complete', got '{other}'"
            )),
        }
    }
}

/// Effective, validated client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Normalized base address, without a trailing slash.
    pub api_base_url: String,
    /// The user whose profile is edited.
    pub username: String,
    /// Per-request timeout; `None` leaves the HTTP client default in place.
    pub request_timeout: Option<Duration>,
    /// How long a notification stays visible.
    pub toast_duration: Duration,
    /// Shape of the update request body.
    pub update_payload: UpdatePayloadMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            request_timeout: None,
            toast_duration: DEFAULT_TOAST_DURATION,
            update_payload: UpdatePayloadMode::Legacy,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with every other value defaulted.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: crate::util::normalize_base_url(&base_url.into()),
            ..Self::default()
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_update_payload(mut self, mode: UpdatePayloadMode) -> Self {
        self.update_payload = mode;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}
