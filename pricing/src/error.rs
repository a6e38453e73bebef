//! Pricing error types

use thiserror::Error;
use shared::{RowIndex, SharedError};

/// Result type for pricing operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Pricing error types
///
/// None of these come from user input: malformed numbers are coerced to zero
/// and a full table is a silent no-op.
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Grand total display is missing")]
    MissingGrandTotal,

    #[error("Row {index} is not registered")]
    UnknownRow { index: RowIndex },

    #[error("Row index mismatch: expected {expected}, got {actual}")]
    IndexMismatch { expected: RowIndex, actual: RowIndex },

    #[error("Row factory failed: {message}")]
    FactoryError { message: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),
}
