//! Root-level message routing

use iced::Task;

use crate::common::messages::cross_domain::handle_event;
use crate::common::messages::{DomainMessage, DomainUpdateResult};
use crate::domains::profile::update::update_profile;
use crate::domains::ui::update::update_ui;
use crate::state::State;

/// Route a message to its domain, then apply the events it emitted.
pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    log::trace!("[Update] {}", message.name());

    let DomainUpdateResult { task, events } = match message {
        DomainMessage::Profile(msg) => update_profile(state, msg),
        DomainMessage::Ui(msg) => update_ui(state, msg),
        DomainMessage::Event(event) => return handle_event(state, event),
    };

    if events.is_empty() {
        return task;
    }

    let mut tasks = Vec::with_capacity(events.len() + 1);
    tasks.push(task);
    for event in events {
        tasks.push(handle_event(state, event));
    }
    Task::batch(tasks)
}
