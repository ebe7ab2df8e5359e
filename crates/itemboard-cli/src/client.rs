//! Shared client utilities and error types for the CLI.

use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use anyhow::anyhow;
use itemboard_api_models::ErrorBody;
use reqwest::{Client, StatusCode};
use url::Url;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.display_message())
    }
}

impl std::error::Error for CliError {}

/// Application context passed to command handlers.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) client: Client,
    pub(crate) base_url: Url,
}

impl AppContext {
    /// Append an API path to the configured base URL, keeping any path prefix.
    pub(crate) fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{path}", url.path().trim_end_matches('/'));
        url.set_path(&joined);
        url.set_query(None);
        url.set_fragment(None);
        url
    }
}

/// Build the shared HTTP client with the configured request timeout.
pub(crate) fn build_client(timeout_secs: u64) -> CliResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))
}

/// Parse the API URL provided to the CLI.
pub(crate) fn parse_url(input: &str) -> Result<Url, String> {
    input
        .parse::<Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))
}

/// Classify a failed HTTP response into a CLI error.
///
/// The message is the body's `error`, then `message`, then `HTTP <status>`.
pub(crate) async fn classify_problem(response: reqwest::Response) -> CliError {
    let status = response.status();
    let bytes = response.bytes().await.unwrap_or_default();
    classify_status(status, &bytes)
}

fn classify_status(status: StatusCode, body: &[u8]) -> CliError {
    let code = status.as_u16();
    let message = ErrorBody::resolve(code, body);
    if matches!(
        status,
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY
    ) {
        CliError::validation(message)
    } else if message == format!("HTTP {code}") {
        CliError::failure(anyhow!(message))
    } else {
        CliError::failure(anyhow!("{message} (status {code})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_validation() {
        let err = classify_status(StatusCode::BAD_REQUEST, br#"{"error":"name is required"}"#);
        assert!(matches!(&err, CliError::Validation(message) if message == "name is required"));
        assert_eq!(err.exit_code(), 2);

        let err = classify_status(StatusCode::CONFLICT, br#"{"message":"duplicate"}"#);
        assert_eq!(err.display_message(), "duplicate");
    }

    #[test]
    fn server_errors_map_to_failure_with_status() {
        let err = classify_status(StatusCode::INTERNAL_SERVER_ERROR, b"");
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.display_message(), "HTTP 500");

        let err = classify_status(StatusCode::NOT_FOUND, br#"{"error":"not found"}"#);
        assert_eq!(err.display_message(), "not found (status 404)");
    }

    #[test]
    fn parse_url_reports_invalid_input() {
        assert!(parse_url("http://127.0.0.1:5001").is_ok());
        let err = parse_url("not a url").unwrap_err();
        assert!(err.starts_with("invalid URL 'not a url'"));
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let ctx = AppContext {
            client: Client::new(),
            base_url: "http://localhost:5001/itemboard/".parse().expect("valid URL"),
        };
        let url = ctx.endpoint("/api/items/3");
        assert_eq!(url.as_str(), "http://localhost:5001/itemboard/api/items/3");

        let ctx = AppContext {
            client: Client::new(),
            base_url: "http://localhost:5001".parse().expect("valid URL"),
        };
        assert_eq!(ctx.endpoint("/api/health").as_str(), "http://localhost:5001/api/health");
    }
}
