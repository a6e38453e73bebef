//! Test fixtures and data for pricing tests
//!
//! Consistent rows and catalog data used across the test suites.

use std::str::FromStr;

use pricing::{CatalogItem, RowRecord, RowTemplate};
use shared::{Decimal, RowIndex};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const PLACEHOLDER: &'static str = "\u{2014}";

    pub fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// The three-row example: 65.00 + excluded + 20.00 = 85.00
    pub fn example_rows() -> Vec<RowRecord> {
        vec![
            RowRecord::new(RowIndex(0), Self::dec("10"), Self::dec("5"))
                .with_included(true)
                .with_hours(Self::dec("2"))
                .with_quantity(Self::dec("3")),
            RowRecord::new(RowIndex(1), Self::dec("75"), Self::dec("40"))
                .with_included(false)
                .with_hours(Self::dec("9"))
                .with_quantity(Self::dec("9")),
            RowRecord::new(RowIndex(2), Self::dec("100"), Self::dec("20"))
                .with_included(true)
                .with_hours(Self::dec("0"))
                .with_quantity(Self::dec("5")),
        ]
    }

    pub fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem {
                code: "dev".to_string(),
                name: "Development".to_string(),
                hourly_rate: Self::dec("95"),
                base_fee: Self::dec("250"),
                default_hours: Self::dec("10"),
                default_quantity: Self::dec("1"),
            },
            CatalogItem {
                code: "design".to_string(),
                name: "Design".to_string(),
                hourly_rate: Self::dec("80"),
                base_fee: Self::dec("0"),
                default_hours: Self::dec("4"),
                default_quantity: Self::dec("2"),
            },
            CatalogItem {
                code: "pm".to_string(),
                name: "Project management".to_string(),
                hourly_rate: Self::dec("70"),
                base_fee: Self::dec("100"),
                default_hours: Self::dec("1"),
                default_quantity: Self::dec("1"),
            },
        ]
    }

    pub fn blank_template() -> RowTemplate {
        RowTemplate {
            hourly_rate: Self::dec("50"),
            base_fee: Self::dec("10"),
            ..RowTemplate::default()
        }
    }
}
