//! Errors raised by the API client and their user-facing text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text shown when nothing better can be extracted from an error.
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Structured error body the REST API returns on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessageDto {
    pub message: String,
    #[serde(default)]
    pub detail: Option<String>,
    /// Validation errors keyed by field, when the API reports them.
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("API error {status}")]
    Api {
        status: u16,
        /// Parsed error payload, `None` when the body was not an [`ErrorMessageDto`].
        body: Option<ErrorMessageDto>,
        raw: String,
    },
    /// No response: DNS, connection, CORS, aborted request.
    #[error("no response from API: {0}")]
    Network(String),
    /// A success response whose body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Raised on the client before or instead of a request.
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    /// Build from a non-success response body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        ApiError::Api {
            status,
            body: serde_json::from_slice::<ErrorMessageDto>(body).ok(),
            raw: String::from_utf8_lossy(body).into_owned(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Reduce any error to one line of text for the page.
///
/// A structured API payload wins (`"message: detail"` when a detail is present).
/// Client-side errors keep their own message. Everything else, including
/// network failures and unstructured bodies, becomes `fallback`.
pub fn extract_error_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Api {
            body: Some(dto), ..
        } => match dto.detail.as_deref().filter(|d| !d.is_empty()) {
            Some(detail) => format!("{}: {}", dto.message, detail),
            None => dto.message.clone(),
        },
        ApiError::Invalid(message) if !message.trim().is_empty() => message.clone(),
        _ => fallback.to_string(),
    }
}

/// Log a failed call once, in one place.
pub(crate) fn log_error(method: &str, path: &str, err: &ApiError) {
    match err {
        ApiError::Api {
            status,
            body: Some(dto),
            ..
        } => {
            tracing::error!(
                %method, %path, status, message = %dto.message,
                detail = ?dto.detail, errors = ?dto.errors,
                "API error"
            );
        }
        ApiError::Api { status, raw, .. } => {
            tracing::error!(%method, %path, status, body = %raw, "API error");
        }
        ApiError::Network(reason) => {
            tracing::error!(%method, %path, %reason, "No response from API");
        }
        other => {
            tracing::error!(%method, %path, error = %other, "API error");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_with_detail() {
        let err = ApiError::from_response(
            400,
            br#"{"message":"Validation failed","detail":"Name is required"}"#,
        );
        assert_eq!(
            extract_error_message(&err, DEFAULT_ERROR_MESSAGE),
            "Validation failed: Name is required"
        );
    }

    #[test]
    fn test_message_without_detail() {
        let err = ApiError::from_response(404, br#"{"message":"Person not found","detail":null}"#);
        assert_eq!(extract_error_message(&err, "x"), "Person not found");

        let err = ApiError::from_response(404, br#"{"message":"Person not found","detail":""}"#);
        assert_eq!(extract_error_message(&err, "x"), "Person not found");
    }

    #[test]
    fn test_malformed_body_uses_fallback() {
        let err = ApiError::from_response(500, b"<html>Internal Server Error</html>");
        assert!(matches!(err, ApiError::Api { body: None, .. }));
        assert_eq!(
            extract_error_message(&err, "Failed to load genders."),
            "Failed to load genders."
        );
    }

    #[test]
    fn test_network_error_uses_fallback() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(
            extract_error_message(&err, DEFAULT_ERROR_MESSAGE),
            DEFAULT_ERROR_MESSAGE
        );
        let err = ApiError::Decode("expected value".into());
        assert_eq!(extract_error_message(&err, "fallback"), "fallback");
    }

    #[test]
    fn test_client_side_message_is_kept() {
        let err = ApiError::Invalid("Name is required.".into());
        assert_eq!(extract_error_message(&err, "fallback"), "Name is required.");
        let err = ApiError::Invalid("  ".into());
        assert_eq!(extract_error_message(&err, "fallback"), "fallback");
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(ApiError::from_response(409, b"").status(), Some(409));
        assert_eq!(ApiError::Network(String::new()).status(), None);
    }
}
