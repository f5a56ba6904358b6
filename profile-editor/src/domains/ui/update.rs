use crate::{
    common::messages::DomainUpdateResult,
    domains::ui::{feedback_ui::update_feedback_ui, messages::UiMessage},
    state::State,
};

/// Handle UI domain messages
pub fn update_ui(state: &mut State, message: UiMessage) -> DomainUpdateResult {
    match message {
        UiMessage::Feedback(msg) => update_feedback_ui(state, msg),
    }
}
