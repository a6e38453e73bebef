//! Service tests for pricing
//!
//! This module contains tests for the pricing service implementations.
