//! Test helpers for draft form tests

use std::collections::HashMap;

use async_trait::async_trait;
use autofill::ContactLookup;
use draft_form::{DraftForm, FormEvent};
use pricing::CatalogRowFactory;
use shared::{CompanyId, ContactRecord};

use super::fixtures::TestFixtures;

/// In-memory company directory; unknown companies have no contact
#[derive(Default)]
pub struct DirectoryLookup {
    contacts: HashMap<String, ContactRecord>,
}

impl DirectoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contact(mut self, company: &str, record: ContactRecord) -> Self {
        self.contacts.insert(company.to_string(), record);
        self
    }
}

#[async_trait]
impl ContactLookup for DirectoryLookup {
    async fn primary_contact(&self, company: &CompanyId) -> Option<ContactRecord> {
        self.contacts.get(company.as_str()).cloned()
    }
}

/// Common helper functions for tests
pub struct TestHelpers;

impl TestHelpers {
    pub fn directory() -> DirectoryLookup {
        DirectoryLookup::new()
            .with_contact("1", TestFixtures::acme())
            .with_contact("2", TestFixtures::globex())
    }

    pub fn form() -> DraftForm<DirectoryLookup, CatalogRowFactory> {
        DraftForm::with_lookup(TestFixtures::session(), Self::directory()).unwrap()
    }

    /// Feed JSON event lines to a form, panicking on the first bad one
    pub fn replay(form: &mut DraftForm<DirectoryLookup, CatalogRowFactory>, lines: &[&str]) {
        for line in lines {
            let event = FormEvent::from_json(line).unwrap();
            form.handle_event(event).unwrap();
        }
    }
}
