//! Error types for ABR lookups
//!
//! Every failure is returned to the caller of the operation that hit it. Nothing
//! here is retried or logged-and-dropped.

use thiserror::Error;

use crate::messages::MessageKey;
use crate::validation::ValidationFailure;

/// Error returned by every [`crate::AbnClient`] operation
#[derive(Error, Debug)]
pub enum AbnError {
    /// A required input (GUID, ABN, ACN or name) was empty. No request was sent.
    #[error("{message}")]
    Precondition { key: MessageKey, message: String },

    /// ABN failed the check-digit scheme
    #[error("{message}")]
    Validation {
        failure: ValidationFailure,
        message: String,
    },

    /// The HTTP exchange itself failed; no body was read
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A body was received but could not be turned into records
    #[error("{source}")]
    Response {
        status: u16,
        #[source]
        source: ResponseError,
    },
}

impl AbnError {
    /// HTTP status captured for this failure, when a response arrived
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            Self::Precondition { .. } | Self::Validation { .. } | Self::Transport(_) => None,
        }
    }

    /// Message reported by the registry inside the response body, if that is the failure
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            Self::Response {
                source: ResponseError::Upstream(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

/// Failure turning a response body into records
#[derive(Error, Debug)]
pub enum ResponseError {
    /// The registry reported a logical error via the `Message` field.
    /// Displays as the registry's text, verbatim.
    #[error("{0}")]
    Upstream(String),

    #[error("malformed response: field `{field}` should be {expected}")]
    Malformed {
        field: String,
        expected: &'static str,
    },

    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response body is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

impl ResponseError {
    pub(crate) fn malformed(field: impl Into<String>, expected: &'static str) -> Self {
        Self::Malformed {
            field: field.into(),
            expected,
        }
    }
}

/// Failure of the HTTP capability
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Raised by custom [`crate::HttpTransport`] implementations
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Invalid configuration value
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("invalid base URL '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, AbnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_displays_verbatim() {
        let err = AbnError::Response {
            status: 200,
            source: ResponseError::Upstream("Search text is not a valid ABN or ACN".to_string()),
        };
        assert_eq!(err.to_string(), "Search text is not a valid ABN or ACN");
        assert_eq!(err.status(), Some(200));
        assert_eq!(
            err.upstream_message(),
            Some("Search text is not a valid ABN or ACN")
        );
    }

    #[test]
    fn test_malformed_names_field() {
        let err = ResponseError::malformed("Names[1].Score", "a number");
        assert_eq!(
            err.to_string(),
            "malformed response: field `Names[1].Score` should be a number"
        );
    }

    #[test]
    fn test_precondition_has_no_status() {
        let err = AbnError::Precondition {
            key: MessageKey::GuidRequired,
            message: "guid is required".to_string(),
        };
        assert_eq!(err.to_string(), "guid is required");
        assert_eq!(err.status(), None);
        assert_eq!(err.upstream_message(), None);
    }
}
