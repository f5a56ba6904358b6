//! Environment keys and built-in defaults.

use std::time::Duration;

pub const ENV_CONFIG_PATH: &str = "PROFILE_EDITOR_CONFIG";
pub const ENV_API_URL: &str = "PROFILE_API_URL";
pub const ENV_USERNAME: &str = "PROFILE_USERNAME";
pub const ENV_REQUEST_TIMEOUT: &str = "PROFILE_REQUEST_TIMEOUT";
pub const ENV_TOAST_DURATION: &str = "PROFILE_TOAST_DURATION";
pub const ENV_UPDATE_PAYLOAD: &str = "PROFILE_UPDATE_PAYLOAD";

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_USERNAME: &str = "sharma";
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

/// Directory below the platform config dir holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "profile-editor";
pub const CONFIG_FILE_NAME: &str = "config.toml";
