//! Health probe status shown on the home page.

use crate::services::error::ApiError;
use itemboard_api_models::HealthResponse;

/// Result of `GET /api/health`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HealthStatus {
    /// Probe in flight.
    #[default]
    Checking,
    /// Server answered with a status label.
    Reported(String),
    /// Probe failed.
    Failed,
}

impl HealthStatus {
    /// Map a probe result into a status.
    #[must_use]
    pub fn from_result(result: &Result<HealthResponse, ApiError>) -> Self {
        match result {
            Ok(health) => Self::Reported(health.status_label().to_string()),
            Err(_) => Self::Failed,
        }
    }

    /// Text rendered on the page.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Checking => "Checking...",
            Self::Reported(status) => status,
            Self::Failed => "error",
        }
    }
}
