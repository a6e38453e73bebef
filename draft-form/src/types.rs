//! Type definitions for the draft form host
//!
//! UI events, the session file that describes a form on load, and the
//! snapshot printed after every event.

use serde::{Deserialize, Serialize};

use pricing::{CatalogItem, FieldChange, RowSnapshot, RowTemplate};
use shared::{FormConfig, RowIndex, SharedResult};

/// Which contact input the user typed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactInput {
    Name,
    Email,
}

/// One user interaction with the draft form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// The company selector changed
    SelectCompany { company: String },
    /// A row's include checkbox was toggled
    ToggleRow { row: RowIndex, included: bool },
    /// Any input inside a row changed
    EditRow { row: RowIndex, change: FieldChange },
    /// The user typed into a contact input
    TypeContact { input: ContactInput, value: String },
    /// The "add row" button was clicked
    AddRow,
}

impl FormEvent {
    pub fn from_json(line: &str) -> SharedResult<Self> {
        Ok(serde_json::from_str(line)?)
    }
}

/// A draft form as the page renders it on load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftSession {
    pub config: FormConfig,
    /// Active catalog items; each becomes one initial row
    pub catalog: Vec<CatalogItem>,
    /// Defaults for rows added with "add row"
    pub blank_row: RowTemplate,
    /// Company preselected when the form loads, blank for none
    pub company: String,
    pub contact_name: String,
    pub contact_email: String,
}

impl DraftSession {
    pub fn from_json(json: &str) -> SharedResult<Self> {
        let session: Self = serde_json::from_str(json)?;
        session.config.validate()?;
        Ok(session)
    }
}

/// Everything the form displays at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub company: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub rows: Vec<RowSnapshot>,
    pub grand_total: String,
    pub total_rows: usize,
    pub max_rows: usize,
}
