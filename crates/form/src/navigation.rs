//! Navigation state the modal is driven by
//!
//! The host's location carries two tokens: `search` opens the modal to
//! create a new entry, `edit` opens it on an existing target. Writing an
//! empty search (and no edit token) closes it.

use serde::{Deserialize, Serialize};

/// URL-query-like location owned by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Search token; non-empty opens the modal in create mode
    #[serde(default)]
    pub search: String,

    /// Edit token; non-empty opens the modal on that target
    #[serde(default)]
    pub edit: String,
}

impl Location {
    /// The location that closes the modal
    pub fn closed() -> Self {
        Self::default()
    }

    /// A location asking to create a new entry
    pub fn creating(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            edit: String::new(),
        }
    }

    /// A location asking to edit an existing target
    pub fn editing(target: impl Into<String>) -> Self {
        Self {
            search: String::new(),
            edit: target.into(),
        }
    }

    /// Whether the modal should be visible
    pub fn is_open(&self) -> bool {
        !self.search.is_empty() || !self.edit.is_empty()
    }

    /// The edit target, if any
    pub fn edit_target(&self) -> Option<&str> {
        if self.edit.is_empty() {
            None
        } else {
            Some(&self.edit)
        }
    }
}
