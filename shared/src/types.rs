//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{SharedError, SharedResult};

/// Stable position of a priced row, assigned at creation and never reused
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowIndex(pub usize);

impl RowIndex {
    pub fn value(self) -> usize {
        self.0
    }
}

impl From<usize> for RowIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a selected company, as found in the company selector
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyId(String);

impl CompanyId {
    /// Parse a selector value. Blank values mean "nothing selected" and are rejected.
    pub fn parse(raw: &str) -> SharedResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SharedError::InvalidCompanyId {
                input: raw.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Selector value to id, treating a blank selection as `None`
    pub fn from_selection(raw: &str) -> Option<Self> {
        Self::parse(raw).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CompanyId {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CompanyId> for String {
    fn from(id: CompanyId) -> Self {
        id.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Primary contact of a company as returned by the contact endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ContactRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Trimmed name, `None` when absent or blank
    pub fn normalized_name(&self) -> Option<String> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }

    /// Trimmed, lower-cased email, `None` when absent or blank
    pub fn normalized_email(&self) -> Option<String> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_lowercase)
    }
}

/// Component tag attached to every log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    Pricing,
    Autofill,
    Session,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Pricing => write!(f, "pricing"),
            Component::Autofill => write!(f, "autofill"),
            Component::Session => write!(f, "session"),
        }
    }
}
