//! Contact endpoint URLs
//!
//! The page carries one endpoint for company id `0`, e.g.
//! `https://crm.example/companies/ajax-primary/0/`. The URL for any other
//! company swaps that final `0` segment for the company id.

use shared::CompanyId;
use url::Url;

use crate::error::{AutofillError, AutofillResult};

/// Contact endpoint whose last path segment is the `0` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTemplate {
    base: Url,
}

impl EndpointTemplate {
    pub fn parse(raw: &str) -> AutofillResult<Self> {
        let invalid = |reason: &str| AutofillError::InvalidEndpoint {
            endpoint: raw.to_string(),
            reason: reason.to_string(),
        };

        let base = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
        let placeholder = base
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .ok_or_else(|| invalid("URL cannot carry a path"))?;
        if placeholder != "0" {
            return Err(invalid("last path segment must be the 0 placeholder"));
        }

        Ok(Self { base })
    }

    /// Lookup URL for a company, always ending in `/`
    pub fn url_for(&self, company: &CompanyId) -> AutofillResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| AutofillError::InvalidEndpoint {
                endpoint: self.base.to_string(),
                reason: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .pop()
            .push(company.as_str())
            .push("");
        Ok(url)
    }

    pub fn as_str(&self) -> &str {
        self.base.as_str()
    }
}
