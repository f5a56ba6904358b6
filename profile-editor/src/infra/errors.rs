//! API error types
//!
//! Errors carry owned strings rather than the underlying `reqwest` error so
//! they can travel inside cloneable UI messages.

use thiserror::Error;

/// Failure of a call against the profile API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection,
    /// timeout, TLS).
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("Request failed with status {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// A success response whose body did not have the expected shape.
    #[error("Invalid response (status {status}): {reason}")]
    MalformedResponse { status: u16, reason: String },

    /// The HTTP client could not be constructed.
    #[error("Client error: {0}")]
    Client(String),
}

impl ApiError {
    /// Text shown to the user in an error notification.
    ///
    /// Prefers the server supplied `message`; falls back to a status line
    /// when the error body did not carry one.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Server {
                status,
                message: None,
            } => format!("Request failed with status {status}"),
            ApiError::MalformedResponse { .. } => {
                "Unexpected response from server".to_string()
            }
            ApiError::Transport(reason) => {
                format!("Could not reach server: {reason}")
            }
            ApiError::Client(reason) => reason.clone(),
        }
    }

    /// HTTP status if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. }
            | ApiError::MalformedResponse { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::Client(_) => None,
        }
    }

    /// Shorthand for a server error carrying a message.
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        ApiError::Server {
            status,
            message: Some(message.into()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::Client(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
