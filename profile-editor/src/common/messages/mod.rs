pub mod cross_domain;

use crate::domains::profile;
use crate::domains::ui;
use crate::domains::ui::feedback_ui::Notification;

use iced::Task;

/// Result of a domain update that includes both a task and events to emit
pub struct DomainUpdateResult {
    /// The task to execute (may produce more messages)
    pub task: Task<DomainMessage>,
    /// Events to broadcast to other domains immediately
    pub events: Vec<CrossDomainEvent>,
}

impl DomainUpdateResult {
    /// Create a result with just a task
    pub fn task(task: Task<DomainMessage>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    /// Create a result with task and events
    pub fn with_events(
        task: Task<DomainMessage>,
        events: Vec<CrossDomainEvent>,
    ) -> Self {
        Self { task, events }
    }
}

impl std::fmt::Debug for DomainUpdateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainUpdateResult")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

/// The main domain message router
#[derive(Clone, Debug)]
pub enum DomainMessage {
    /// Profile fetch/edit/update domain
    Profile(profile::messages::ProfileMessage),

    /// UI/View domain
    Ui(ui::messages::UiMessage),

    /// Cross-domain event for coordination
    Event(CrossDomainEvent),
}

impl From<profile::messages::ProfileMessage> for DomainMessage {
    fn from(msg: profile::messages::ProfileMessage) -> Self {
        DomainMessage::Profile(msg)
    }
}

impl From<ui::messages::UiMessage> for DomainMessage {
    fn from(msg: ui::messages::UiMessage) -> Self {
        DomainMessage::Ui(msg)
    }
}

impl From<ui::feedback_ui::FeedbackMessage> for DomainMessage {
    fn from(msg: ui::feedback_ui::FeedbackMessage) -> Self {
        DomainMessage::Ui(msg.into())
    }
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Profile(msg) => msg.name(),
            Self::Ui(msg) => msg.name(),
            Self::Event(_) => "DomainMessage::Event",
        }
    }
}

/// Cross-domain event bus for coordination
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrossDomainEvent {
    /// Show a toast
    Notify(Notification),
    /// The user clicked "Log Out"; there is no session to end yet
    LogoutRequested,
}
