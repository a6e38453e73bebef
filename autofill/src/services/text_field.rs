//! In-memory form field

use std::sync::RwLock;

use crate::traits::FormField;

/// Form field that keeps its value in memory
#[derive(Debug, Default)]
pub struct TextField {
    value: RwLock<String>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: RwLock::new(value.into()),
        }
    }
}

impl FormField for TextField {
    fn value(&self) -> String {
        self.value
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_value(&self, value: &str) {
        let mut current = self.value.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        current.clear();
        current.push_str(value);
    }
}
