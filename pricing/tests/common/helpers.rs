//! Test helpers for pricing tests
//!
//! Builds engines with in-memory surfaces so tests can read back what a page
//! would display.

use std::sync::Arc;

use pricing::{
    AggregationEngine, CatalogRowFactory, DisplaySurface, EngineBuilder, FieldChange, RowAppender,
    RowBinding, RowEdit, RowRecord, TextSurface,
};
use shared::{CurrencyFormat, ManagementCounts};

use super::fixtures::TestFixtures;

/// Engine plus the surfaces it writes to
pub struct EngineHarness {
    pub engine: AggregationEngine,
    pub grand_total: Arc<TextSurface>,
}

impl EngineHarness {
    pub fn displayed_total(&self) -> String {
        self.grand_total.text()
    }

    pub fn edit(&mut self, row: usize, change: FieldChange) {
        self.engine.apply_edit(&RowEdit::new(row, change)).unwrap();
    }
}

/// Common helper functions for tests
pub struct TestHelpers;

impl TestHelpers {
    pub fn harness(records: Vec<RowRecord>) -> EngineHarness {
        let grand_total = Arc::new(TextSurface::new());
        let engine = EngineBuilder::new()
            .grand_total(grand_total.clone())
            .format(CurrencyFormat::default())
            .rows(
                records
                    .into_iter()
                    .map(|record| RowBinding::new(record, Arc::new(TextSurface::new()))),
            )
            .build()
            .unwrap();
        EngineHarness {
            engine,
            grand_total,
        }
    }

    pub fn catalog_harness() -> (EngineHarness, RowAppender<CatalogRowFactory>) {
        let factory = CatalogRowFactory::new(TestFixtures::catalog(), TestFixtures::blank_template());
        let grand_total = Arc::new(TextSurface::new());
        let engine = EngineBuilder::new()
            .grand_total(grand_total.clone())
            .rows(factory.materialize())
            .build()
            .unwrap();
        let appender = RowAppender::new(factory, ManagementCounts::new(engine.len(), 5));
        (
            EngineHarness {
                engine,
                grand_total,
            },
            appender,
        )
    }
}
