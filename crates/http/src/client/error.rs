//! Client error types

use thiserror::Error;

/// Broad classes of remote failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The remote answered with a non-success status
    ServerRejected,
    /// No response was received
    Unreachable,
    /// The request could not be built or sent
    RequestSetupFailed,
    /// The client itself is misconfigured
    Configuration,
}

/// Client error types.
///
/// `Display` yields the message alone so callers can show it to users as-is.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server returned an error status
    #[error("{message}")]
    ServerRejected { status: u16, message: String },

    /// Network failure or timeout
    #[error("{0}")]
    Unreachable(String),

    /// Request construction failed
    #[error("{0}")]
    RequestSetupFailed(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ServerRejected { .. } => ErrorKind::ServerRejected,
            Self::Unreachable(_) => ErrorKind::Unreachable,
            Self::RequestSetupFailed(_) => ErrorKind::RequestSetupFailed,
            Self::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// HTTP status of a rejected request
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ServerRejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Replace the message, keeping the kind and status
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::ServerRejected { status, .. } => Self::ServerRejected { status, message },
            Self::Unreachable(_) => Self::Unreachable(message),
            Self::RequestSetupFailed(_) => Self::RequestSetupFailed(message),
            Self::Configuration(_) => Self::Configuration(message),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::RequestSetupFailed(format!("Error setting up request: {err}"))
        } else {
            Self::Unreachable(format!("No response received: {err}"))
        }
    }
}

impl From<catalog_core::Error> for ClientError {
    fn from(err: catalog_core::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}
