use std::time::Instant;

use iced::Task;

use crate::{
    common::messages::DomainUpdateResult,
    domains::ui::feedback_ui::FeedbackMessage, state::State,
};

pub fn update_feedback_ui(
    state: &mut State,
    message: FeedbackMessage,
) -> DomainUpdateResult {
    let toasts = &mut state.domains.ui.state.toast_manager;
    match message {
        FeedbackMessage::ShowToast(notification) => {
            toasts.push(notification);
        }
        FeedbackMessage::DismissToast(id) => {
            if !toasts.dismiss(id) {
                log::debug!("[Feedback] Toast {:?} already gone", id);
            }
        }
        FeedbackMessage::PruneExpired => {
            let removed = toasts.prune_expired(Instant::now());
            if removed > 0 {
                log::trace!("[Feedback] Pruned {} expired toasts", removed);
            }
        }
    }
    DomainUpdateResult::task(Task::none())
}
