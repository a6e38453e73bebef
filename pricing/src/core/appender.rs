//! Row appender
//!
//! Grows the row table one blank row at a time, up to the configured cap.

use shared::{form_debug, form_info, Component, ManagementCounts, RowIndex};

use crate::core::engine::AggregationEngine;
use crate::error::PricingResult;
use crate::traits::RowFactory;

/// Appends factory-made rows to an engine and keeps the row counters
pub struct RowAppender<F>
where
    F: RowFactory,
{
    factory: F,
    counts: ManagementCounts,
}

impl<F> RowAppender<F>
where
    F: RowFactory,
{
    pub fn new(factory: F, counts: ManagementCounts) -> Self {
        Self { factory, counts }
    }

    /// Appender whose total count starts at the engine's current row count
    pub fn for_engine(factory: F, engine: &AggregationEngine, max_rows: usize) -> Self {
        Self::new(factory, ManagementCounts::new(engine.len(), max_rows))
    }

    /// Append one row and recompute.
    ///
    /// Returns the new row's index, or `None` when the table is full. The new
    /// row carries whatever defaults the factory gives it.
    pub fn append(&mut self, engine: &mut AggregationEngine) -> PricingResult<Option<RowIndex>> {
        if self.counts.is_saturated() {
            form_debug!(
                Component::Pricing,
                total = self.counts.total_rows,
                max = self.counts.max_rows,
                "Row limit reached, append ignored"
            );
            return Ok(None);
        }

        let index = RowIndex(self.counts.total_rows);
        let binding = self.factory.create_row(index)?;
        engine.register(binding)?;
        self.counts.total_rows += 1;
        engine.recompute_all();

        form_info!(Component::Pricing, row = %index, "➕ Appended row");
        Ok(Some(index))
    }

    pub fn counts(&self) -> ManagementCounts {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::EngineBuilder;
    use crate::error::PricingError;
    use crate::services::TextSurface;
    use crate::traits::MockRowFactory;
    use crate::types::{RowBinding, RowRecord, RowState};
    use shared::Decimal;
    use std::sync::Arc;

    fn engine() -> AggregationEngine {
        EngineBuilder::new()
            .grand_total(Arc::new(TextSurface::new()))
            .build()
            .unwrap()
    }

    fn blank_factory() -> MockRowFactory {
        let mut factory = MockRowFactory::new();
        factory.expect_create_row().returning(|index| {
            Ok(RowBinding::new(
                RowRecord::new(index, Decimal::TEN, Decimal::ONE),
                Arc::new(TextSurface::new()),
            ))
        });
        factory
    }

    #[test]
    fn test_append_assigns_next_index() {
        let mut engine = engine();
        let mut appender = RowAppender::for_engine(blank_factory(), &engine, 10);

        assert_eq!(appender.append(&mut engine).unwrap(), Some(RowIndex(0)));
        assert_eq!(appender.append(&mut engine).unwrap(), Some(RowIndex(1)));
        assert_eq!(appender.counts().total_rows, 2);
        assert_eq!(engine.len(), 2);
        assert_eq!(engine.row_state(RowIndex(1)), Some(RowState::Settled));
    }

    #[test]
    fn test_append_at_capacity_is_noop() {
        let mut engine = engine();
        let mut factory = MockRowFactory::new();
        factory.expect_create_row().never();
        let mut appender = RowAppender::new(factory, ManagementCounts::new(0, 0));

        assert_eq!(appender.append(&mut engine).unwrap(), None);
        assert_eq!(appender.counts().total_rows, 0);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_factory_failure_leaves_counts_unchanged() {
        let mut engine = engine();
        let mut factory = MockRowFactory::new();
        factory.expect_create_row().returning(|_| {
            Err(PricingError::FactoryError {
                message: "template missing".to_string(),
            })
        });
        let mut appender = RowAppender::for_engine(factory, &engine, 5);

        assert!(appender.append(&mut engine).is_err());
        assert_eq!(appender.counts().total_rows, 0);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_factory_returning_wrong_index_is_rejected() {
        let mut engine = engine();
        let mut factory = MockRowFactory::new();
        factory.expect_create_row().returning(|_| {
            Ok(RowBinding::new(
                RowRecord::new(RowIndex(9), Decimal::ZERO, Decimal::ZERO),
                Arc::new(TextSurface::new()),
            ))
        });
        let mut appender = RowAppender::for_engine(factory, &engine, 5);

        let result = appender.append(&mut engine);
        assert!(matches!(result, Err(PricingError::IndexMismatch { .. })));
        assert_eq!(appender.counts().total_rows, 0);
    }
}
