//! Service implementations
//!
//! Real implementations of the pricing seam traits

pub mod catalog_factory;
pub mod text_surface;

#[cfg(test)]
pub mod tests;

// Re-export service implementations
pub use catalog_factory::CatalogRowFactory;
pub use text_surface::TextSurface;
