use std::path::PathBuf;
use std::sync::Arc;

use iced::Task;
use profile_config::{ClientConfig, ConfigLoadError, ConfigLoader};

use crate::common::messages::DomainMessage;
use crate::domains::profile::ProfileMessage;
use crate::infra::errors::ApiError;
use crate::infra::services::{UserProfileApiAdapter, UserProfileService};
use crate::infra::testing::stubs::StubUserProfileService;
use crate::infra::ApiClient;
use crate::state::State;

/// Serve the editor from an in-memory user table instead of the API.
pub const ENV_USE_STUBS: &str = "PROFILE_EDITOR_STUBS";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub client: ClientConfig,
    /// Config file the values were read from, if any.
    pub source_file: Option<PathBuf>,
    pub use_test_stubs: bool,
}

impl AppConfig {
    pub fn from_environment() -> Result<Self, ConfigLoadError> {
        let load = ConfigLoader::new().load()?;
        let use_test_stubs = std::env::var(ENV_USE_STUBS)
            .map(|value| {
                matches!(
                    value.trim().to_ascii_lowercase().as_str(),
                    "1" | "true" | "yes"
                )
            })
            .unwrap_or(false);

        Ok(Self {
            client: load.config,
            source_file: load.source_file,
            use_test_stubs,
        })
    }

    pub fn use_test_stubs(&self) -> bool {
        self.use_test_stubs
    }
}

/// Pick the service implementation the editor will talk to.
pub fn build_service(
    config: &AppConfig,
) -> Result<Arc<dyn UserProfileService>, ApiError> {
    if config.use_test_stubs() {
        log::warn!(
            "[Bootstrap] {} set; serving '{}' from an in-memory stub",
            ENV_USE_STUBS,
            config.client.username
        );
        return Ok(Arc::new(StubUserProfileService::with_demo_user(
            &config.client.username,
        )));
    }

    let client = ApiClient::from_config(&config.client)?;
    Ok(Arc::new(UserProfileApiAdapter::new(Arc::new(client))))
}

/// Initial state, before anything was fetched.
pub fn base_state(config: &AppConfig) -> Result<State, ApiError> {
    let service = build_service(config)?;
    Ok(State::new(service, &config.client))
}

/// Boot logic for the running application: the initial state plus the
/// first fetch.
pub fn runtime_boot(state: State) -> (State, Task<DomainMessage>) {
    log::info!(
        "[Bootstrap] Editing profile of '{}'",
        state.domains.profile.target_user
    );
    (state, Task::done(DomainMessage::from(ProfileMessage::Load)))
}
