//! Core autofill logic

pub mod controller;
pub mod endpoint;

pub use controller::AutofillController;
pub use endpoint::EndpointTemplate;
