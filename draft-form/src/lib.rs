//! Draft form host
//!
//! Wires the pricing engine, the row appender and the contact autofill
//! controller into one draft form and routes UI events to them.

pub mod error;
pub mod state;
pub mod types;

pub use error::{SessionError, SessionResult};
pub use state::DraftForm;
pub use types::*;
