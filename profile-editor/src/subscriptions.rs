//! Root-level subscription composition

use std::time::Duration;

use iced::Subscription;

use crate::common::messages::DomainMessage;
use crate::domains::ui::feedback_ui::FeedbackMessage;
use crate::state::State;

const TOAST_PRUNE_INTERVAL: Duration = Duration::from_millis(250);

/// Composes all subscriptions into a single batch
pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    let mut subscriptions = Vec::new();

    // Only tick while something can expire
    if !state.domains.ui.state.toast_manager.is_empty() {
        subscriptions.push(
            iced::time::every(TOAST_PRUNE_INTERVAL)
                .map(|_| DomainMessage::from(FeedbackMessage::PruneExpired)),
        );
    }

    Subscription::batch(subscriptions)
}
