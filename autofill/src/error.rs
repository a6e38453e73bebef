//! Autofill error types
//!
//! These never reach the user: the lookup boundary turns every failure into
//! "no contact".

use thiserror::Error;
use shared::SharedError;

/// Result type for autofill operations
pub type AutofillResult<T> = Result<T, AutofillError>;

/// Autofill error types
#[derive(Error, Debug)]
pub enum AutofillError {
    #[error("Invalid contact endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Contact endpoint not configured")]
    NotConfigured,

    #[error("Contact request failed: {message}")]
    TransportError { message: String },

    #[error("Contact endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed contact response: {message}")]
    MalformedBody { message: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),
}

impl From<reqwest::Error> for AutofillError {
    fn from(err: reqwest::Error) -> Self {
        AutofillError::TransportError {
            message: err.to_string(),
        }
    }
}
