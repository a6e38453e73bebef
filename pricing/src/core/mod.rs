//! Core pricing logic

pub mod appender;
pub mod calc;
pub mod engine;

pub use appender::RowAppender;
pub use calc::recompute_row;
pub use engine::{AggregationEngine, EngineBuilder};
