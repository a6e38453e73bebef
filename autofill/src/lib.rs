//! Contact autofill for the draft form
//!
//! When a company is selected, looks up its primary contact and prefills the
//! contact name and email fields, but only while those fields are empty.
//! Lookup failures of any kind leave the form untouched.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use crate::core::{AutofillController, EndpointTemplate};
pub use error::{AutofillError, AutofillResult};
pub use types::*;

// Re-export trait definitions
pub use traits::{ContactLookup, FormField};

// Re-export service implementations
pub use services::{HttpContactLookup, TextField};
