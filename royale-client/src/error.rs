//! Client errors.

use derive_more::{Display, Error, From};

use http::{StatusCode, header::InvalidHeaderValue};

use royale_model::{ApiError, InvalidArgument};

/// An error returned by the client.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The request was rejected before anything was sent.
    #[display("{_0}")]
    InvalidArgument(InvalidArgument),
    /// No API key was configured.
    #[display("no API key configured; set `API_KEY` or `api.key`")]
    #[from(ignore)]
    MissingApiKey,
    /// The API key cannot be sent as a header.
    #[display("invalid API key: {_0}")]
    InvalidApiKey(InvalidHeaderValue),
    /// The query parameters could not be encoded.
    #[display("{_0}")]
    Query(serde_urlencoded::ser::Error),
    /// The request failed to reach the API, or its body could not be read.
    #[display("{_0}")]
    Transport(reqwest::Error),
    /// The API answered with a non-success status.
    #[display("API responded with {status}: {error}")]
    #[from(ignore)]
    Api { status: StatusCode, error: ApiError },
    /// The API answered successfully, but not with JSON.
    #[display("malformed response: {_0}")]
    Decode(serde_json::Error),
}

impl Error {
    /// Checks if the error was raised before any request was sent.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// The API's error body, if the API rejected the request.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The HTTP status, if the API rejected the request.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
