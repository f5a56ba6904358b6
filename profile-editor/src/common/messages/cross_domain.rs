//! Cross-domain event coordination
//!
//! Events emitted by one domain that another domain has to act on.

use iced::Task;

use crate::common::messages::{CrossDomainEvent, DomainMessage};
use crate::state::State;

pub fn handle_event(
    state: &mut State,
    event: CrossDomainEvent,
) -> Task<DomainMessage> {
    log::debug!("[CrossDomain] Processing event: {:?}", event);

    match event {
        CrossDomainEvent::Notify(notification) => {
            state.domains.ui.state.toast_manager.push(notification);
            Task::none()
        }
        CrossDomainEvent::LogoutRequested => {
            log::info!(
                "[CrossDomain] Logout requested for '{}'; no session to end",
                state.domains.profile.target_user
            );
            Task::none()
        }
    }
}
