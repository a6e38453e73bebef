//! Per-row pricing

use shared::{CurrencyFormat, Decimal};

use crate::types::{RowOutcome, RowRecord};

/// Line total of an included row: `hours * quantity * hourly_rate + base_fee`.
///
/// The base fee is charged once per line, independent of hours and quantity.
/// A total too large for `Decimal` saturates at `Decimal::MAX`.
pub fn line_total(row: &RowRecord) -> Decimal {
    row.hours
        .checked_mul(row.quantity)
        .and_then(|amount| amount.checked_mul(row.hourly_rate()))
        .and_then(|amount| amount.checked_add(row.base_fee()))
        .unwrap_or(Decimal::MAX)
}

/// Sum of contributions, saturating at `Decimal::MAX`
pub fn saturating_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, |sum, amount| {
        sum.checked_add(amount).unwrap_or(Decimal::MAX)
    })
}

/// Contribution and display text of one row
pub fn recompute_row(row: &RowRecord, format: &CurrencyFormat) -> RowOutcome {
    if !row.included {
        return RowOutcome {
            contribution: Decimal::ZERO,
            display_text: format.placeholder().to_string(),
        };
    }

    let contribution = line_total(row);
    RowOutcome {
        contribution,
        display_text: format.amount(contribution),
    }
}
