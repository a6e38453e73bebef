//! Draft form state
//!
//! One `DraftForm` per page. It owns the row engine and appender outright, so
//! every row edit and recompute happens synchronously inside the event that
//! caused it. Contact lookups run as separate tasks and are only tracked so
//! the host can wait for them before shutting down.

use std::sync::Arc;

use autofill::{
    AutofillController, AutofillOutcome, ContactLookup, EndpointTemplate, FormField,
    HttpContactLookup, TextField,
};
use pricing::{
    AggregationEngine, CatalogRowFactory, EngineBuilder, FieldChange, RowAppender, RowEdit,
    RowFactory, TextSurface,
};
use shared::{form_debug, form_info, form_warn, CompanyId, Component, ManagementCounts};
use tokio::task::JoinHandle;

use crate::error::SessionResult;
use crate::types::{ContactInput, DraftSession, FormEvent, FormSnapshot};

/// A draft form with its pricing table and contact autofill
pub struct DraftForm<L, F>
where
    L: ContactLookup + 'static,
    F: RowFactory,
{
    engine: AggregationEngine,
    appender: RowAppender<F>,
    autofill: AutofillController<L>,
    name_field: Arc<dyn FormField>,
    email_field: Arc<dyn FormField>,
    company: Option<CompanyId>,
    pending_lookups: Vec<JoinHandle<AutofillOutcome>>,
}

impl DraftForm<HttpContactLookup, CatalogRowFactory> {
    /// Build a form from a session file, looking contacts up over HTTP
    pub fn from_session(session: DraftSession) -> SessionResult<Self> {
        let endpoint = session
            .config
            .contact_endpoint
            .as_deref()
            .map(EndpointTemplate::parse)
            .transpose()?;
        if endpoint.is_none() {
            form_warn!(Component::Session, "⚠️ No contact endpoint configured, autofill disabled");
        }
        Self::with_lookup(session, HttpContactLookup::new(endpoint))
    }
}

impl<L> DraftForm<L, CatalogRowFactory>
where
    L: ContactLookup + 'static,
{
    /// Build a form from a session file with the given contact lookup
    pub fn with_lookup(session: DraftSession, lookup: L) -> SessionResult<Self> {
        let factory = CatalogRowFactory::new(session.catalog, session.blank_row);
        let engine = EngineBuilder::new()
            .grand_total(Arc::new(TextSurface::new()))
            .format(session.config.currency_format())
            .rows(factory.materialize())
            .build()?;
        let appender = RowAppender::for_engine(factory, &engine, session.config.max_rows);

        let name_field: Arc<dyn FormField> = Arc::new(TextField::with_value(session.contact_name));
        let email_field: Arc<dyn FormField> =
            Arc::new(TextField::with_value(session.contact_email));
        let autofill = AutofillController::new(lookup, name_field.clone(), email_field.clone());

        let mut form = Self::new(engine, appender, autofill, name_field, email_field);
        form.start(&session.company);
        Ok(form)
    }
}

impl<L, F> DraftForm<L, F>
where
    L: ContactLookup + 'static,
    F: RowFactory,
{
    pub fn new(
        engine: AggregationEngine,
        appender: RowAppender<F>,
        autofill: AutofillController<L>,
        name_field: Arc<dyn FormField>,
        email_field: Arc<dyn FormField>,
    ) -> Self {
        Self {
            engine,
            appender,
            autofill,
            name_field,
            email_field,
            company: None,
            pending_lookups: Vec::new(),
        }
    }

    /// Page-load wiring: record the preselected company and prefill from it
    pub fn start(&mut self, current_selection: &str) {
        self.company = CompanyId::from_selection(current_selection);
        if let Some(handle) = self.autofill.initialize(current_selection) {
            self.pending_lookups.push(handle);
        }
        form_info!(
            Component::Session,
            rows = self.engine.len(),
            total = %self.engine.grand_total_text(),
            "📋 Draft form ready"
        );
    }

    /// Route one UI event to the component that owns it
    pub fn handle_event(&mut self, event: FormEvent) -> SessionResult<()> {
        form_debug!(Component::Session, event = ?event, "Handling event");
        match event {
            FormEvent::SelectCompany { company } => {
                self.company = CompanyId::from_selection(&company);
                if let Some(handle) = self.autofill.on_company_change(&company) {
                    self.pending_lookups.push(handle);
                }
            }
            FormEvent::ToggleRow { row, included } => {
                self.engine
                    .apply_edit(&RowEdit::new(row, FieldChange::Included(included)))?;
            }
            FormEvent::EditRow { row, change } => {
                self.engine.apply_edit(&RowEdit { row, change })?;
            }
            FormEvent::TypeContact { input, value } => match input {
                ContactInput::Name => self.name_field.set_value(&value),
                ContactInput::Email => self.email_field.set_value(&value),
            },
            FormEvent::AddRow => {
                self.appender.append(&mut self.engine)?;
            }
        }
        Ok(())
    }

    /// Number of lookups started but not yet awaited
    pub fn pending_lookups(&self) -> usize {
        self.pending_lookups.len()
    }

    /// Wait for every outstanding lookup, in the order they were started
    pub async fn drain_lookups(&mut self) -> Vec<AutofillOutcome> {
        let mut outcomes = Vec::with_capacity(self.pending_lookups.len());
        for handle in self.pending_lookups.drain(..) {
            match handle.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => {
                    form_debug!(Component::Session, error = %err, "Lookup task ended abnormally");
                    outcomes.push(AutofillOutcome::Unavailable);
                }
            }
        }
        outcomes
    }

    pub fn engine(&self) -> &AggregationEngine {
        &self.engine
    }

    pub fn counts(&self) -> ManagementCounts {
        self.appender.counts()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let table = self.engine.snapshot();
        let counts = self.appender.counts();
        FormSnapshot {
            company: self.company.as_ref().map(|id| id.to_string()),
            contact_name: self.name_field.value(),
            contact_email: self.email_field.value(),
            rows: table.rows,
            grand_total: table.grand_total,
            total_rows: counts.total_rows,
            max_rows: counts.max_rows,
        }
    }
}
