//! Draft form host error types

use thiserror::Error;
use autofill::AutofillError;
use pricing::PricingError;
use shared::SharedError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Autofill error: {0}")]
    Autofill(#[from] AutofillError),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),

    #[error("Invalid event on line {line}: {message}")]
    InvalidEvent { line: usize, message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;
