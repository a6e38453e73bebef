//! Pricing data types

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::money::parse_amount;
use shared::{Decimal, RowIndex};

use crate::traits::DisplaySurface;

/// One priced catalog line
///
/// `hourly_rate` and `base_fee` are fixed at creation. `hours` and `quantity`
/// hold the coerced value of whatever was last typed into the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRecord {
    pub index: RowIndex,
    hourly_rate: Decimal,
    base_fee: Decimal,
    pub included: bool,
    pub hours: Decimal,
    pub quantity: Decimal,
}

impl RowRecord {
    /// New unchecked row with zero hours and quantity
    pub fn new(index: RowIndex, hourly_rate: Decimal, base_fee: Decimal) -> Self {
        Self {
            index,
            hourly_rate: hourly_rate.max(Decimal::ZERO),
            base_fee: base_fee.max(Decimal::ZERO),
            included: false,
            hours: Decimal::ZERO,
            quantity: Decimal::ZERO,
        }
    }

    pub fn with_included(mut self, included: bool) -> Self {
        self.included = included;
        self
    }

    pub fn with_hours(mut self, hours: Decimal) -> Self {
        self.hours = hours.max(Decimal::ZERO);
        self
    }

    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity.max(Decimal::ZERO);
        self
    }

    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    pub fn base_fee(&self) -> Decimal {
        self.base_fee
    }

    /// Apply a field change. Untracked changes leave the record as it is.
    pub fn apply(&mut self, change: &FieldChange) {
        match change {
            FieldChange::Included(included) => self.included = *included,
            FieldChange::Hours(raw) => self.hours = parse_amount(raw),
            FieldChange::Quantity(raw) => self.quantity = parse_amount(raw),
            FieldChange::Untracked { .. } => {}
        }
    }
}

/// A row record together with the cell that displays its total
#[derive(Clone)]
pub struct RowBinding {
    pub record: RowRecord,
    pub total_cell: Arc<dyn DisplaySurface>,
}

impl RowBinding {
    pub fn new(record: RowRecord, total_cell: Arc<dyn DisplaySurface>) -> Self {
        Self { record, total_cell }
    }

    pub fn index(&self) -> RowIndex {
        self.record.index
    }
}

impl std::fmt::Debug for RowBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowBinding")
            .field("record", &self.record)
            .field("total_cell", &self.total_cell.text())
            .finish()
    }
}

/// A user edit to one field of a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldChange {
    /// The row's "include" checkbox
    Included(bool),
    /// Raw text of the hours input
    Hours(String),
    /// Raw text of the quantity input
    Quantity(String),
    /// Any other input inside the row; never triggers a recompute
    Untracked { name: String, value: String },
}

impl FieldChange {
    pub fn is_tracked(&self) -> bool {
        !matches!(self, FieldChange::Untracked { .. })
    }
}

/// Edit addressed to a registered row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowEdit {
    pub row: RowIndex,
    pub change: FieldChange,
}

impl RowEdit {
    pub fn new(row: impl Into<RowIndex>, change: FieldChange) -> Self {
        Self {
            row: row.into(),
            change,
        }
    }
}

/// Result of recomputing one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    pub contribution: Decimal,
    pub display_text: String,
}

/// Whether a row's displayed total reflects its current inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowState {
    Stale,
    Settled,
}

/// One pickable catalog item: a job rate and a base setting bundled with
/// default hours and quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub code: String,
    pub name: String,
    pub hourly_rate: Decimal,
    #[serde(default)]
    pub base_fee: Decimal,
    #[serde(default = "default_one")]
    pub default_hours: Decimal,
    #[serde(default = "default_one")]
    pub default_quantity: Decimal,
}

fn default_one() -> Decimal {
    Decimal::ONE
}

/// Defaults for a freshly appended blank row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RowTemplate {
    pub hourly_rate: Decimal,
    pub base_fee: Decimal,
    pub included: bool,
    pub hours: Decimal,
    pub quantity: Decimal,
}

impl RowTemplate {
    pub fn stamp(&self, index: RowIndex) -> RowRecord {
        RowRecord::new(index, self.hourly_rate, self.base_fee)
            .with_included(self.included)
            .with_hours(self.hours)
            .with_quantity(self.quantity)
    }
}

/// Rendered state of one row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSnapshot {
    pub index: RowIndex,
    pub included: bool,
    pub hours: Decimal,
    pub quantity: Decimal,
    pub display: String,
    pub state: RowState,
}

/// Rendered state of the whole table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub rows: Vec<RowSnapshot>,
    pub grand_total: String,
}
