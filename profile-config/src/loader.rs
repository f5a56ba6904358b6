use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use url::Url;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::error::ConfigLoadError;
use crate::models::ClientConfig;
use crate::sources::{EnvConfig, FileConfig};
use crate::util::{normalize_base_url, parse_duration, parse_optional_duration};

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: ClientConfig,
    /// File that contributed values, if any.
    pub source_file: Option<PathBuf>,
}

/// Composes defaults, the optional TOML file and the environment.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    read_dotenv: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_path: None,
            read_dotenv: true,
        }
    }

    /// Use this file instead of the environment/platform default location.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Skip reading `.env` before consulting the environment.
    pub fn without_dotenv(mut self) -> Self {
        self.read_dotenv = false;
        self
    }

    /// Load from the process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        if self.read_dotenv {
            match dotenvy::dotenv() {
                Ok(path) => log::debug!("[Config] Loaded {}", path.display()),
                Err(err) if err.not_found() => {}
                Err(err) => log::warn!("[Config] Ignoring .env: {}", err),
            }
        }
        let env = EnvConfig::from_env()?;
        self.load_with_env(env)
    }

    /// Load using already collected environment values.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let source_file = self
            .config_path
            .clone()
            .or_else(|| env.config_path.clone())
            .or_else(default_config_path);

        let file = match source_file.as_deref() {
            Some(path) => read_file_config(path)?,
            None => FileConfig::default(),
        };

        let config = compose(file, env)?;
        log::info!(
            "[Config] API {} as '{}' (payload: {})",
            config.api_base_url,
            config.username,
            config.update_payload
        );

        Ok(ConfigLoad {
            config,
            source_file,
        })
    }
}

/// `<config_dir>/profile-editor/config.toml`, when it exists.
fn default_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME);
    path.exists().then_some(path)
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let raw = read_to_string(path).map_err(|source| {
        ConfigLoadError::ReadFile {
            path: path.to_path_buf(),
            source,
        }
    })?;
    toml::from_str(&raw).map_err(|source| ConfigLoadError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}

fn compose(
    file: FileConfig,
    env: EnvConfig,
) -> Result<ClientConfig, ConfigLoadError> {
    let defaults = ClientConfig::default();

    let raw_url = env
        .api_base_url
        .or(file.api.base_url)
        .unwrap_or(defaults.api_base_url);
    let api_base_url = validate_base_url(&raw_url)?;

    let username = env
        .username
        .or(file.api.username)
        .unwrap_or(defaults.username);
    if username.trim().is_empty() {
        return Err(ConfigLoadError::EmptyUsername);
    }

    let request_timeout = match env.request_timeout {
        Some(timeout) => timeout,
        None => match file.api.request_timeout {
            Some(raw) => parse_optional_duration(&raw).map_err(|reason| {
                ConfigLoadError::InvalidValue {
                    key: "api.request_timeout",
                    value: raw.clone(),
                    reason,
                }
            })?,
            None => defaults.request_timeout,
        },
    };

    let toast_duration = match env.toast_duration {
        Some(duration) => duration,
        None => match file.ui.toast_duration {
            Some(raw) => parse_duration(&raw).map_err(|reason| {
                ConfigLoadError::InvalidValue {
                    key: "ui.toast_duration",
                    value: raw.clone(),
                    reason,
                }
            })?,
            None => defaults.toast_duration,
        },
    };

    let update_payload = env
        .update_payload
        .or(file.api.update_payload)
        .unwrap_or(defaults.update_payload);

    Ok(ClientConfig {
        api_base_url,
        username,
        request_timeout,
        toast_duration,
        update_payload,
    })
}

fn validate_base_url(raw: &str) -> Result<String, ConfigLoadError> {
    let normalized = normalize_base_url(raw);
    let parsed = Url::parse(&normalized).map_err(|source| {
        ConfigLoadError::InvalidBaseUrl {
            value: raw.to_string(),
            source,
        }
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigLoadError::UnsupportedScheme {
            value: raw.to_string(),
        });
    }
    if normalized != raw {
        log::warn!(
            "[Config] Using '{}' for configured base URL '{}'",
            normalized,
            raw
        );
    }
    Ok(normalized)
}
