/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// Error body the account service returns on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Human readable message, e.g. `Validation failed`
    pub title: Option<String>,
    /// Status echoed by the service
    pub status: Option<u16>,
    /// Per-field validation messages
    pub errors: Option<serde_json::Value>,
}

/// A non-2xx response
#[derive(Debug, Clone)]
pub struct HttpError {
    /// Response status
    pub status: StatusCode,
    /// `title` field of the error body, when the body parsed
    pub title: Option<String>,
    /// Raw response body
    pub body: String,
}

impl HttpError {
    /// Builds the error from a status and the raw body, parsing the title if possible
    pub fn new(status: StatusCode, body: String) -> Self {
        let title = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.title);
        Self {
            status,
            title,
            body,
        }
    }

    /// The parsed title or an empty string
    #[must_use]
    pub fn message(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.title {
            Some(title) => write!(f, "HTTP {}: {title}", self.status),
            None => write!(f, "HTTP {}: {}", self.status, self.body),
        }
    }
}

/// Main error type for the library
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Transport failure before a response was received
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The service answered with a non-2xx status
    #[error("{0}")]
    Http(HttpError),
    /// A request record could not be built from the given payload
    #[error("validation error: {0}")]
    Validation(String),
    /// The poll budget ran out without a matching message
    #[error("activation token for {login} was not received")]
    TokenNotFound {
        /// Login whose token was requested
        login: String,
    },
    /// The activation token took longer than the allowed deadline
    #[error("activation token for {login} took {elapsed:?}, limit is {limit:?}")]
    ActivationTimeout {
        /// Login whose token was requested
        login: String,
        /// Time spent polling
        elapsed: Duration,
        /// Allowed time
        limit: Duration,
    },
    /// A flow checkpoint saw an unexpected state
    #[error("assertion failed: {0}")]
    Assertion(String),
    /// An expected response header was absent or empty
    #[error("missing header: {0}")]
    MissingHeader(String),
    /// JSON encoding or decoding failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid argument supplied by the caller
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Status code of an HTTP error, `None` for every other variant
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http(e) => Some(e.status),
            _ => None,
        }
    }
}

impl From<HttpError> for AppError {
    fn from(e: HttpError) -> Self {
        AppError::Http(e)
    }
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, AppError>;
