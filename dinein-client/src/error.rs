//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server replied with an error body
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        /// Field-level errors, populated for order validation failures
        details: Vec<String>,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Local precondition not met (no session, empty cart, bad id...)
    #[error("Invalid state: {0}")]
    State(String),

    /// Persistent state could not be written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    pub fn api(status: u16, message: impl Into<String>, details: Vec<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            details,
        }
    }

    /// HTTP status of a server-reported error, if that is what this is
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Field-level error list, empty unless the server itemized one
    pub fn details(&self) -> &[String] {
        match self {
            Self::Api { details, .. } => details,
            _ => &[],
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
