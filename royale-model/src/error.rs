//! API error representations.

use std::fmt::{self, Display, Formatter};

use derive_more::Error;

use serde::{Deserialize, Serialize};

use serde_json::Value;

/// API error.
///
/// This is the body the API sends alongside any non-success status.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Error)]
pub struct ApiError {
    /// A short machine-readable reason, like `accessDenied` or `notFound`.
    pub reason: String,
    /// A user-friendly message of the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The error's type, if the API reports one.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Additional details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl ApiError {
    /// Creates an `ApiError` with only a reason.
    pub fn new(reason: impl Into<String>) -> ApiError {
        ApiError {
            reason: reason.into(),
            message: None,
            kind: None,
            detail: None,
        }
    }

    /// Attachs a message to the error.
    pub fn with_message(self, message: impl Into<String>) -> ApiError {
        ApiError {
            message: Some(message.into()),
            ..self
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.message.as_ref() {
            Some(message) => write!(f, "{}: {}", self.reason, message),
            None => self.reason.fmt(f),
        }
    }
}

/// A request was rejected locally before anything was sent.
#[derive(Clone, Debug, derive_more::Display, Error, PartialEq, Eq)]
#[display("{_0}")]
pub struct InvalidArgument(#[error(not(source))] pub String);

impl InvalidArgument {
    /// Creates a new `InvalidArgument` with a descriptive message.
    pub fn new(message: impl Into<String>) -> InvalidArgument {
        InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_decodes_reason_and_message() {
        let error: ApiError = serde_json::from_str(
            r#"{"reason":"accessDenied","message":"Invalid authorization","type":"client"}"#,
        )
        .unwrap();

        assert_eq!(error.reason, "accessDenied");
        assert_eq!(error.kind.as_deref(), Some("client"));
        assert_eq!(error.to_string(), "accessDenied: Invalid authorization");
    }

    #[test]
    fn api_error_without_message_displays_reason() {
        let error: ApiError = serde_json::from_str(r#"{"reason":"notFound"}"#).unwrap();

        assert_eq!(error, ApiError::new("notFound"));
        assert_eq!(error.to_string(), "notFound");
    }
}
