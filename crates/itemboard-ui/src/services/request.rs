//! Request planning and body decoding for the fetch wrapper.
//!
//! # Design
//! - Every call goes through `plan_request` so header defaults and URL joining
//!   are identical for all endpoints.
//! - Response bodies are parsed leniently: empty or non-JSON bodies become `None`.

use crate::services::error::ApiError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Header applied to every request unless the caller overrides it.
pub const CONTENT_TYPE_JSON: (&str, &str) = ("Content-Type", "application/json");

/// HTTP verbs used by the items API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// `GET`
    #[default]
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

/// Caller-supplied overrides for a single call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// HTTP method (defaults to `GET`).
    pub method: HttpMethod,
    /// Extra headers; same-named defaults are replaced.
    pub headers: Vec<(String, String)>,
    /// Serialized request body.
    pub body: Option<String>,
}

impl RequestOptions {
    /// Options for a bodiless request.
    #[must_use]
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Options carrying `payload` encoded as JSON.
    ///
    /// # Errors
    /// Returns [`ApiError::Decode`] when the payload cannot be serialized.
    pub fn json<T: Serialize>(method: HttpMethod, payload: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload)
            .map_err(|err| ApiError::Decode(format!("encode request body: {err}")))?;
        Ok(Self {
            method,
            headers: Vec::new(),
            body: Some(body),
        })
    }

    /// Add or replace a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Fully resolved request ready for the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedRequest {
    /// Absolute URL.
    pub url: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Merged headers in send order.
    pub headers: Vec<(String, String)>,
    /// Request body.
    pub body: Option<String>,
}

/// Resolve `path` against `base_url` and merge caller options over the defaults.
#[must_use]
pub fn plan_request(base_url: &str, path: &str, options: &RequestOptions) -> PlannedRequest {
    let mut headers = vec![(
        CONTENT_TYPE_JSON.0.to_string(),
        CONTENT_TYPE_JSON.1.to_string(),
    )];
    for (name, value) in &options.headers {
        if let Some(existing) = headers
            .iter_mut()
            .find(|(current, _)| current.eq_ignore_ascii_case(name))
        {
            existing.1.clone_from(value);
        } else {
            headers.push((name.clone(), value.clone()));
        }
    }
    PlannedRequest {
        url: format!("{}{path}", base_url.trim_end_matches('/')),
        method: options.method,
        headers,
        body: options.body.clone(),
    }
}

/// Parse a response body, yielding `None` for empty or unparseable text.
#[must_use]
pub fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    serde_json::from_str(text).ok()
}

/// Decode a parsed body into a typed payload.
///
/// # Errors
/// Returns [`ApiError::Decode`] when the body is missing or has the wrong shape.
pub fn decode_payload<T: DeserializeOwned>(body: Option<Value>, what: &str) -> Result<T, ApiError> {
    let value = body.ok_or_else(|| ApiError::Decode(format!("{what}: empty body")))?;
    serde_json::from_value(value).map_err(|err| ApiError::Decode(format!("{what}: {err}")))
}
