//! Normalised API failures surfaced to the UI.

use itemboard_api_models::ErrorBody;
use thiserror::Error;

/// Failure of a call against the items API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The transport rejected the request before a response arrived.
    #[error("{0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, or `HTTP <status>`.
        message: String,
    },
    /// A success response did not carry the expected payload.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an [`ApiError::Http`] from a failed response body.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        Self::Http {
            status,
            message: ErrorBody::resolve(status, body),
        }
    }

    /// HTTP status, when the failure came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Banner text for this failure, using `fallback` when the message is blank.
    #[must_use]
    pub fn banner(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}
