//! Catalog-backed row factory
//!
//! Initial rows come from the active catalog items, each unchecked with the
//! item's default hours and quantity. Appended rows are stamped from a blank
//! row template.

use std::sync::Arc;

use shared::{form_debug, Component, RowIndex};

use crate::error::PricingResult;
use crate::services::text_surface::TextSurface;
use crate::traits::{DisplaySurface, RowFactory};
use crate::types::{CatalogItem, RowBinding, RowRecord, RowTemplate};

/// Row factory backed by a catalog and a blank row template
#[derive(Debug, Clone, Default)]
pub struct CatalogRowFactory {
    catalog: Vec<CatalogItem>,
    template: RowTemplate,
}

impl CatalogRowFactory {
    pub fn new(catalog: Vec<CatalogItem>, template: RowTemplate) -> Self {
        Self { catalog, template }
    }

    /// Rows for every catalog item, indexed from 0 in catalog order
    pub fn materialize(&self) -> Vec<RowBinding> {
        self.catalog
            .iter()
            .enumerate()
            .map(|(position, item)| {
                let record = RowRecord::new(RowIndex(position), item.hourly_rate, item.base_fee)
                    .with_hours(item.default_hours)
                    .with_quantity(item.default_quantity);
                RowBinding::new(record, Self::new_cell())
            })
            .collect()
    }

    fn new_cell() -> Arc<dyn DisplaySurface> {
        Arc::new(TextSurface::new())
    }
}

impl RowFactory for CatalogRowFactory {
    fn create_row(&self, index: RowIndex) -> PricingResult<RowBinding> {
        form_debug!(Component::Pricing, row = %index, "Stamping blank row");
        Ok(RowBinding::new(self.template.stamp(index), Self::new_cell()))
    }
}
