//! Service trait definitions for dependency injection
//!
//! The network lookup and the form fields are abstracted through these traits
//! so the controller can be tested without a server or a page.

use async_trait::async_trait;
use shared::{CompanyId, ContactRecord};

/// Primary-contact lookup keyed by company
#[mockall::automock]
#[async_trait]
pub trait ContactLookup: Send + Sync {
    /// Fetch the company's primary contact. Every failure is `None`.
    async fn primary_contact(&self, company: &CompanyId) -> Option<ContactRecord>;
}

/// A text input the controller may prefill
#[mockall::automock]
pub trait FormField: Send + Sync {
    /// Current value
    fn value(&self) -> String;

    /// Replace the value
    fn set_value(&self, value: &str);
}
