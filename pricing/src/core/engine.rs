//! Row aggregation engine
//!
//! Owns the ordered row collection and the grand total display. Every
//! recompute walks all rows from scratch, so the displayed total is always a
//! pure function of the current rows and never a drifting running sum.

use std::sync::Arc;

use shared::{form_debug, form_error, Component, CurrencyFormat, Decimal, RowIndex};

use crate::core::calc::{recompute_row, saturating_sum};
use crate::error::{PricingError, PricingResult};
use crate::traits::DisplaySurface;
use crate::types::{
    EngineSnapshot, RowBinding, RowEdit, RowRecord, RowSnapshot, RowState,
};

struct RegisteredRow {
    record: RowRecord,
    total_cell: Arc<dyn DisplaySurface>,
    state: RowState,
}

/// Builder for [`AggregationEngine`]
///
/// The grand total display is mandatory: building without one is a
/// configuration defect and fails instead of producing an inert calculator.
#[derive(Default)]
pub struct EngineBuilder {
    rows: Vec<RowBinding>,
    grand_total: Option<Arc<dyn DisplaySurface>>,
    format: CurrencyFormat,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display that receives the formatted grand total
    pub fn grand_total(mut self, surface: Arc<dyn DisplaySurface>) -> Self {
        self.grand_total = Some(surface);
        self
    }

    /// Set currency symbol and placeholder glyph
    pub fn format(mut self, format: CurrencyFormat) -> Self {
        self.format = format;
        self
    }

    /// Add one initial row
    pub fn row(mut self, binding: RowBinding) -> Self {
        self.rows.push(binding);
        self
    }

    /// Add the initial rows, which must be indexed 0.. contiguously
    pub fn rows(mut self, bindings: impl IntoIterator<Item = RowBinding>) -> Self {
        self.rows.extend(bindings);
        self
    }

    /// Register the initial rows and run the first recompute
    pub fn build(self) -> PricingResult<AggregationEngine> {
        let Some(grand_total) = self.grand_total else {
            form_error!(Component::Pricing, "❌ Grand total display missing, refusing to start");
            return Err(PricingError::MissingGrandTotal);
        };

        let mut engine = AggregationEngine {
            rows: Vec::with_capacity(self.rows.len()),
            grand_total,
            format: self.format,
            total: Decimal::ZERO,
        };
        for binding in self.rows {
            engine.register(binding)?;
        }
        engine.recompute_all();
        Ok(engine)
    }
}

/// Live price summary over a growing collection of rows
pub struct AggregationEngine {
    rows: Vec<RegisteredRow>,
    grand_total: Arc<dyn DisplaySurface>,
    format: CurrencyFormat,
    total: Decimal,
}

impl AggregationEngine {
    /// Add a row to the collection. Its index must be the next one.
    ///
    /// The row stays stale until the next recompute.
    pub fn register(&mut self, binding: RowBinding) -> PricingResult<RowIndex> {
        let expected = RowIndex(self.rows.len());
        let actual = binding.index();
        if actual != expected {
            return Err(PricingError::IndexMismatch { expected, actual });
        }

        self.rows.push(RegisteredRow {
            record: binding.record,
            total_cell: binding.total_cell,
            state: RowState::Stale,
        });
        form_debug!(Component::Pricing, row = %actual, "Registered row");
        Ok(actual)
    }

    /// Recompute every row, write each row cell and the grand total.
    ///
    /// Returns the unrounded grand total, saturated at `Decimal::MAX`.
    pub fn recompute_all(&mut self) -> Decimal {
        let format = &self.format;
        let sum = saturating_sum(self.rows.iter_mut().map(|row| {
            let outcome = recompute_row(&row.record, format);
            row.total_cell.set_text(&outcome.display_text);
            row.state = RowState::Settled;
            outcome.contribution
        }));

        self.total = sum;
        let text = self.format.amount(sum);
        self.grand_total.set_text(&text);
        form_debug!(Component::Pricing, rows = self.rows.len(), total = %text, "Recomputed totals");
        sum
    }

    /// Apply a user edit to one row.
    ///
    /// Tracked fields (included, hours, quantity) trigger a full recompute and
    /// return the new total; any other field returns `None` without one.
    pub fn apply_edit(&mut self, edit: &RowEdit) -> PricingResult<Option<Decimal>> {
        let row = self
            .rows
            .get_mut(edit.row.value())
            .ok_or(PricingError::UnknownRow { index: edit.row })?;

        if !edit.change.is_tracked() {
            return Ok(None);
        }
        row.record.apply(&edit.change);
        row.state = RowState::Stale;
        Ok(Some(self.recompute_all()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: RowIndex) -> Option<&RowRecord> {
        self.rows.get(index.value()).map(|row| &row.record)
    }

    pub fn row_state(&self, index: RowIndex) -> Option<RowState> {
        self.rows.get(index.value()).map(|row| row.state)
    }

    /// Text currently shown in a row's total cell
    pub fn row_display(&self, index: RowIndex) -> Option<String> {
        self.rows.get(index.value()).map(|row| row.total_cell.text())
    }

    /// Grand total as of the last recompute
    pub fn grand_total(&self) -> Decimal {
        self.total
    }

    pub fn grand_total_text(&self) -> String {
        self.grand_total.text()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            rows: self
                .rows
                .iter()
                .map(|row| RowSnapshot {
                    index: row.record.index,
                    included: row.record.included,
                    hours: row.record.hours,
                    quantity: row.record.quantity,
                    display: row.total_cell.text(),
                    state: row.state,
                })
                .collect(),
            grand_total: self.grand_total.text(),
        }
    }
}
