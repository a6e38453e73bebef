//! Shared types for the draft-form workspace
//!
//! Contains only what more than one component needs: identifiers, money
//! parsing and formatting, configuration and logging. Component-internal
//! types are kept in their respective crates.

pub mod config;
pub mod errors;
pub mod logging;
pub mod money;
pub mod types;

pub use config::{FormConfig, ManagementCounts, DEFAULT_MAX_ROWS};
pub use errors::*;
pub use money::CurrencyFormat;
pub use types::*;

// Re-exported so downstream crates name one decimal type
pub use rust_decimal::Decimal;
