//! Form configuration
//!
//! Settings a draft form page supplies to its enhancement layer. Every field
//! has a default so a partial session file is still a valid configuration.

use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};
use crate::money::{CurrencyFormat, DEFAULT_CURRENCY_SYMBOL, DEFAULT_PLACEHOLDER};

/// Row cap used when the page does not provide one
pub const DEFAULT_MAX_ROWS: usize = 1000;

/// Draft form configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct FormConfig {
    /// Upper bound on the number of priced rows
    pub max_rows: usize,
    /// Literal prefix for formatted amounts
    pub currency_symbol: String,
    /// Text shown in the total cell of an excluded row
    pub placeholder: String,
    /// Contact lookup endpoint, ending in a `0/` placeholder segment
    pub contact_endpoint: Option<String>,
}

impl FormConfig {
    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_symbol.clone(), self.placeholder.clone())
    }

    pub fn from_json(json: &str) -> SharedResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SharedResult<()> {
        if self.currency_symbol.is_empty() {
            return Err(SharedError::InvalidConfig {
                field: "currency_symbol".to_string(),
                value: String::new(),
            });
        }
        if let Some(endpoint) = &self.contact_endpoint {
            if endpoint.trim().is_empty() {
                return Err(SharedError::InvalidConfig {
                    field: "contact_endpoint".to_string(),
                    value: endpoint.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            contact_endpoint: None,
        }
    }
}

/// Row-count bookkeeping: how many rows exist and how many may exist
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManagementCounts {
    pub total_rows: usize,
    pub max_rows: usize,
}

impl ManagementCounts {
    pub fn new(total_rows: usize, max_rows: usize) -> Self {
        Self {
            total_rows,
            max_rows,
        }
    }

    pub fn is_saturated(&self) -> bool {
        self.total_rows >= self.max_rows
    }
}
