//! In-memory display surface

use std::sync::RwLock;

use crate::traits::DisplaySurface;

/// Display surface that keeps its text in memory
#[derive(Debug, Default)]
pub struct TextSurface {
    text: RwLock<String>,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: RwLock::new(text.into()),
        }
    }
}

impl DisplaySurface for TextSurface {
    fn set_text(&self, text: &str) {
        let mut current = self.text.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        current.clear();
        current.push_str(text);
    }

    fn text(&self) -> String {
        self.text
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
