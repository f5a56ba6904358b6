//! Root application state

use std::sync::Arc;

use profile_config::ClientConfig;

use crate::domains::DomainRegistry;
use crate::domains::profile::{ProfileDomain, ProfileState};
use crate::domains::ui::feedback_ui::ToastManager;
use crate::domains::ui::{UIDomain, UIDomainState};
use crate::infra::services::UserProfileService;

#[derive(Debug)]
pub struct State {
    pub domains: DomainRegistry,
}

impl State {
    /// Build the initial state for `config.username`, talking to `service`.
    pub fn new(
        service: Arc<dyn UserProfileService>,
        config: &ClientConfig,
    ) -> Self {
        let profile = ProfileDomain::new(
            ProfileState::new(config.update_payload),
            service,
            config.username.clone(),
        );
        let ui = UIDomain::new(UIDomainState {
            toast_manager: ToastManager::new(config.toast_duration),
            avatar_handle: None,
        });

        Self {
            domains: DomainRegistry { profile, ui },
        }
    }
}
