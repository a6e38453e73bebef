//! Service tests for autofill
//!
//! This module contains tests for the autofill service implementations.

pub mod http_lookup;
