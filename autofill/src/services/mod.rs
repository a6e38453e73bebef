//! Service implementations
//!
//! Real implementations of the autofill seam traits

pub mod http_lookup;
pub mod text_field;

#[cfg(test)]
pub mod tests;

// Re-export service implementations
pub use http_lookup::HttpContactLookup;
pub use text_field::TextField;
