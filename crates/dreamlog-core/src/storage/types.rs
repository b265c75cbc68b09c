//! Core data types for the storage layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A journal entry.
///
/// Field order here is the field order of the export format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dream {
    /// Unique identifier, assigned at creation and never changed
    pub id: String,

    /// Logical date of the dream; opaque to the store
    pub date: String,

    /// Display title
    pub title: String,

    /// Free-form body
    pub content: String,
}

impl Dream {
    /// Attach a freshly generated identifier to a new dream.
    pub fn from_new(new_dream: &NewDream) -> Self {
        Self::with_id(generate_id(), new_dream)
    }

    pub(crate) fn with_id(id: String, new_dream: &NewDream) -> Self {
        Self {
            id,
            date: new_dream.date.clone(),
            title: new_dream.title.clone(),
            content: new_dream.content.clone(),
        }
    }
}

/// Builder for creating new dreams. Callers never supply the identifier.
#[derive(Debug, Clone, Default)]
pub struct NewDream {
    pub date: String,
    pub title: String,
    pub content: String,
}

impl NewDream {
    pub fn new(date: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
            content: String::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

/// Generate a new dream identifier (random 128-bit UUID, hyphenated).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
