//! Seams between the pricing core and its collaborators
//!
//! Rendering and row construction are abstracted through these traits so the
//! aggregation algorithm can be exercised without any page behind it.

use shared::RowIndex;

use crate::error::PricingResult;
use crate::types::RowBinding;

/// Text output: a row total cell or the grand total display
#[mockall::automock]
pub trait DisplaySurface: Send + Sync {
    /// Replace the displayed text
    fn set_text(&self, text: &str);

    /// Currently displayed text
    fn text(&self) -> String;
}

/// Produces a fresh row for a given index
#[mockall::automock]
pub trait RowFactory: Send + Sync {
    /// Create exactly one row whose record carries `index`
    fn create_row(&self, index: RowIndex) -> PricingResult<RowBinding>;
}
