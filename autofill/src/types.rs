//! Autofill result types

use serde::{Deserialize, Serialize};

/// What happened to one target field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFill {
    /// The field was empty and now holds the looked-up value
    Filled,
    /// The field already had a value, which was kept
    AlreadySet,
    /// The lookup had no usable value for this field
    NoValue,
}

/// Result of applying one lookup to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AutofillOutcome {
    /// The lookup failed or returned nothing; the form is unchanged
    Unavailable,
    /// The lookup succeeded and each field was considered
    Applied { name: FieldFill, email: FieldFill },
}

impl AutofillOutcome {
    pub fn filled_any(&self) -> bool {
        matches!(
            self,
            AutofillOutcome::Applied { name: FieldFill::Filled, .. }
                | AutofillOutcome::Applied { email: FieldFill::Filled, .. }
        )
    }
}
