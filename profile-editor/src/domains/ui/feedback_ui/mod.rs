pub mod toast;
pub mod update;

use crate::domains::ui::messages::UiMessage;

pub use toast::{
    Notification, ToastId, ToastLevel, ToastManager, ToastNotification,
};
pub use update::update_feedback_ui;

#[derive(Clone)]
pub enum FeedbackMessage {
    ShowToast(Notification),
    DismissToast(ToastId),
    /// Drop toasts whose lifetime has passed.
    PruneExpired,
}

impl From<FeedbackMessage> for UiMessage {
    fn from(msg: FeedbackMessage) -> Self {
        UiMessage::Feedback(msg)
    }
}

impl FeedbackMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShowToast(_) => "UI::ShowToast",
            Self::DismissToast(_) => "UI::DismissToast",
            Self::PruneExpired => "UI::PruneExpired",
        }
    }
}

impl std::fmt::Debug for FeedbackMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShowToast(notification) => {
                write!(f, "UI::ShowToast({:?})", notification.level)
            }
            Self::DismissToast(id) => write!(f, "UI::DismissToast({:?})", id),
            Self::PruneExpired => write!(f, "UI::PruneExpired"),
        }
    }
}
