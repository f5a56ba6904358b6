//! Transient notifications
//!
//! Toasts are non-blocking messages that disappear on their own after a
//! fixed lifetime or when dismissed.

use std::time::{Duration, Instant};

use profile_config::constants::DEFAULT_TOAST_DURATION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A request to show something to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: ToastLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }

    fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// A notification currently on screen.
#[derive(Debug, Clone)]
pub struct ToastNotification {
    pub id: ToastId,
    pub level: ToastLevel,
    pub message: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl ToastNotification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }
}

/// Ordered set of visible toasts, oldest first.
#[derive(Debug, Clone)]
pub struct ToastManager {
    pub toasts: Vec<ToastNotification>,
    ttl: Duration,
    next_id: u64,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ToastManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            ttl,
            next_id: 0,
        }
    }

    pub fn push(&mut self, notification: Notification) -> ToastId {
        self.push_at(notification, Instant::now())
    }

    pub fn push_at(
        &mut self,
        notification: Notification,
        now: Instant,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(ToastNotification {
            id,
            level: notification.level,
            message: notification.message,
            created_at: now,
            ttl: self.ttl,
        });
        id
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Drop expired toasts, returning how many were removed.
    pub fn prune_expired(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired(now));
        before - self.toasts.len()
    }

    pub fn latest(&self) -> Option<&ToastNotification> {
        self.toasts.last()
    }

    pub fn messages(&self, level: ToastLevel) -> Vec<&str> {
        self.toasts
            .iter()
            .filter(|toast| toast.level == level)
            .map(|toast| toast.message.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}
