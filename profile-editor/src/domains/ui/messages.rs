use crate::domains::ui::feedback_ui::FeedbackMessage;

#[derive(Clone, Debug)]
pub enum UiMessage {
    Feedback(FeedbackMessage),
}

impl UiMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Feedback(msg) => msg.name(),
        }
    }
}
