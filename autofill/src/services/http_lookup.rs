//! HTTP contact lookup
//!
//! GETs the company's contact endpoint with the AJAX marker header and reads
//! a `{name, email}` JSON object. Non-success status, transport errors and
//! unreadable bodies all come back as "no contact". No timeout is applied;
//! a hung request simply never fills the form.

use async_trait::async_trait;
use shared::{form_debug, Component, CompanyId, ContactRecord};

use crate::core::EndpointTemplate;
use crate::error::{AutofillError, AutofillResult};
use crate::traits::ContactLookup;

const REQUESTED_WITH: &str = "X-Requested-With";
const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Contact lookup over HTTP
#[derive(Debug, Clone)]
pub struct HttpContactLookup {
    client: reqwest::Client,
    endpoint: Option<EndpointTemplate>,
}

impl HttpContactLookup {
    /// Create a lookup. Without an endpoint every lookup yields nothing.
    pub fn new(endpoint: Option<EndpointTemplate>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: Option<EndpointTemplate>) -> Self {
        Self { client, endpoint }
    }

    /// Fetch and decode the contact, reporting why it failed
    pub async fn fetch(&self, company: &CompanyId) -> AutofillResult<ContactRecord> {
        let endpoint = self.endpoint.as_ref().ok_or(AutofillError::NotConfigured)?;
        let url = endpoint.url_for(company)?;

        let response = self
            .client
            .get(url)
            .header(REQUESTED_WITH, XML_HTTP_REQUEST)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AutofillError::HttpStatus {
                status: response.status().as_u16(),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AutofillError::MalformedBody {
                message: e.to_string(),
            })?;
        serde_json::from_value(body).map_err(|e| AutofillError::MalformedBody {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ContactLookup for HttpContactLookup {
    async fn primary_contact(&self, company: &CompanyId) -> Option<ContactRecord> {
        match self.fetch(company).await {
            Ok(record) => Some(record),
            Err(err) => {
                form_debug!(Component::Autofill, company = %company, error = %err, "Contact lookup failed");
                None
            }
        }
    }
}
