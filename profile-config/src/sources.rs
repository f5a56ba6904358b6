use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ENV_API_URL, ENV_CONFIG_PATH, ENV_REQUEST_TIMEOUT, ENV_TOAST_DURATION,
    ENV_UPDATE_PAYLOAD, ENV_USERNAME,
};
use crate::error::ConfigLoadError;
use crate::models::UpdatePayloadMode;
use crate::util::{non_empty, parse_duration, parse_optional_duration};

/// Raw configuration as written in a TOML file.
///
/// ```toml
/// [api]
/// base_url = "http://localhost:5000"
/// username = "sharma"
/// request_timeout = "30s"
/// update_payload = "legacy"
///
/// [ui]
/// toast_duration = "4s"
/// ```
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub api: FileApiConfig,
    #[serde(default)]
    pub ui: FileUiConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_payload: Option<UpdatePayloadMode>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileUiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toast_duration: Option<String>,
}

/// Environment-derived configuration values, already parsed.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub api_base_url: Option<String>,
    pub username: Option<String>,
    /// `Some(None)` means the timeout was explicitly disabled.
    pub request_timeout: Option<Option<Duration>>,
    pub toast_duration: Option<Duration>,
    pub update_payload: Option<UpdatePayloadMode>,
}

impl EnvConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read values through an arbitrary lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let request_timeout = non_empty(&lookup, ENV_REQUEST_TIMEOUT)
            .map(|raw| {
                parse_optional_duration(&raw).map_err(|reason| {
                    ConfigLoadError::InvalidValue {
                        key: ENV_REQUEST_TIMEOUT,
                        value: raw.clone(),
                        reason,
                    }
                })
            })
            .transpose()?;

        let toast_duration = non_empty(&lookup, ENV_TOAST_DURATION)
            .map(|raw| {
                parse_duration(&raw).map_err(|reason| {
                    ConfigLoadError::InvalidValue {
                        key: ENV_TOAST_DURATION,
                        value: raw.clone(),
                        reason,
                    }
                })
            })
            .transpose()?;

        let update_payload = non_empty(&lookup, ENV_UPDATE_PAYLOAD)
            .map(|raw| {
                raw.parse::<UpdatePayloadMode>().map_err(|reason| {
                    ConfigLoadError::InvalidValue {
                        key: ENV_UPDATE_PAYLOAD,
                        value: raw.clone(),
                        reason,
                    }
                })
            })
            .transpose()?;

        Ok(Self {
            config_path: non_empty(&lookup, ENV_CONFIG_PATH).map(PathBuf::from),
            api_base_url: non_empty(&lookup, ENV_API_URL),
            username: non_empty(&lookup, ENV_USERNAME),
            request_timeout,
            toast_duration,
            update_payload,
        })
    }
}
