use thiserror::Error;

/// Core error types shared by the catalog crates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Session state was read outside of a provider scope
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
