//! Contact autofill controller
//!
//! One controller per form, holding its lookup and the two target fields.
//! A selection change spawns a lookup; when it resolves, each field is
//! written only if it is empty at that moment.
//!
//! Superseded lookups are not cancelled. If the user changes the selection
//! twice in quick succession, whichever lookup resolves first fills the empty
//! fields and the later one finds them taken, even when the later one belongs
//! to the current selection.

use std::sync::Arc;

use shared::{form_debug, form_info, form_warn, Component, CompanyId, ContactRecord};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::traits::{ContactLookup, FormField};
use crate::types::{AutofillOutcome, FieldFill};

/// Prefills contact fields from the selected company's primary contact
pub struct AutofillController<L>
where
    L: ContactLookup + 'static,
{
    lookup: Arc<L>,
    name_field: Arc<dyn FormField>,
    email_field: Arc<dyn FormField>,
}

impl<L> Clone for AutofillController<L>
where
    L: ContactLookup + 'static,
{
    fn clone(&self) -> Self {
        Self {
            lookup: self.lookup.clone(),
            name_field: self.name_field.clone(),
            email_field: self.email_field.clone(),
        }
    }
}

impl<L> AutofillController<L>
where
    L: ContactLookup + 'static,
{
    pub fn new(lookup: L, name_field: Arc<dyn FormField>, email_field: Arc<dyn FormField>) -> Self {
        Self {
            lookup: Arc::new(lookup),
            name_field,
            email_field,
        }
    }

    /// Eager prefill for a selection already present when the form loads
    pub fn initialize(&self, current_selection: &str) -> Option<JoinHandle<AutofillOutcome>> {
        if CompanyId::from_selection(current_selection).is_none() {
            form_debug!(Component::Autofill, "No company preselected, skipping prefill");
            return None;
        }
        self.on_company_change(current_selection)
    }

    /// React to a change of the company selector.
    ///
    /// A blank selection does nothing. Otherwise the lookup runs as its own
    /// task on the current Tokio runtime so the form stays interactive; the
    /// handle may be dropped. Outside a runtime the lookup is skipped.
    pub fn on_company_change(&self, selection: &str) -> Option<JoinHandle<AutofillOutcome>> {
        let company = CompanyId::from_selection(selection)?;
        let Ok(runtime) = Handle::try_current() else {
            form_warn!(Component::Autofill, company = %company, "⚠️ No async runtime, contact lookup skipped");
            return None;
        };
        form_debug!(Component::Autofill, company = %company, "Company selected, looking up contact");

        let controller = self.clone();
        Some(runtime.spawn(async move {
            controller.load_primary_contact(&company).await
        }))
    }

    /// Look up a company's contact and apply it to the form
    pub async fn load_primary_contact(&self, company: &CompanyId) -> AutofillOutcome {
        match self.lookup.primary_contact(company).await {
            Some(record) => {
                let outcome = self.apply_contact(&record);
                form_info!(Component::Autofill, company = %company, outcome = ?outcome, "📇 Contact lookup applied");
                outcome
            }
            None => {
                form_debug!(Component::Autofill, company = %company, "No contact available");
                AutofillOutcome::Unavailable
            }
        }
    }

    /// Write the record into whichever target fields are currently empty
    pub fn apply_contact(&self, record: &ContactRecord) -> AutofillOutcome {
        let name = Self::fill_if_empty(self.name_field.as_ref(), record.normalized_name());
        let email = Self::fill_if_empty(self.email_field.as_ref(), record.normalized_email());
        AutofillOutcome::Applied { name, email }
    }

    fn fill_if_empty(field: &dyn FormField, value: Option<String>) -> FieldFill {
        let Some(value) = value else {
            return FieldFill::NoValue;
        };
        if !field.value().is_empty() {
            return FieldFill::AlreadySet;
        }
        field.set_value(&value);
        FieldFill::Filled
    }
}
