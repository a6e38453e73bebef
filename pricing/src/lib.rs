//! Pricing library for the draft form
//!
//! Keeps a live price summary over a growing table of selectable line items:
//! the aggregation engine recomputes every row and the grand total after each
//! tracked edit, and the row appender grows the table through a row factory.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use crate::core::{recompute_row, AggregationEngine, EngineBuilder, RowAppender};
pub use error::{PricingError, PricingResult};
pub use types::*;

// Re-export trait definitions
pub use traits::{DisplaySurface, RowFactory};

// Re-export service implementations
pub use services::{CatalogRowFactory, TextSurface};
