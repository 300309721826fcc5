//! Mode resolution
//!
//! Pure derivation of whether the modal is open, whether it creates or
//! edits, and which content type is authoritative.

use crate::navigation::Location;
use serde::Serialize;
use sitemap_core::{Choice, SettingsType};

/// Lifecycle phase of the modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "phase", content = "target", rename_all = "camelCase")]
pub enum ModalPhase {
    /// Not visible
    #[default]
    Closed,
    /// Open on a new entry
    Creating,
    /// Open on an existing entry
    Editing(String),
}

impl ModalPhase {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalPhase::Closed)
    }

    pub fn is_creating(&self) -> bool {
        matches!(self, ModalPhase::Creating)
    }

    /// The edit target, if editing
    pub fn edit_target(&self) -> Option<&str> {
        match self {
            ModalPhase::Editing(target) => Some(target),
            _ => None,
        }
    }
}

/// Result of resolving the mode for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMode {
    pub settings_type: SettingsType,
    pub phase: ModalPhase,
    /// Authoritative content type for this render
    pub content_type: Choice<String>,
    /// Whether the content-type input is locked
    pub content_type_locked: bool,
}

impl ResolvedMode {
    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }
}

/// Resolve the mode from the location and the locally chosen content type
///
/// The edit target wins over anything typed locally and locks the input.
pub fn resolve(
    location: &Location,
    local_content_type: &Choice<String>,
    settings_type: SettingsType,
) -> ResolvedMode {
    let phase = match location.edit_target() {
        Some(target) => ModalPhase::Editing(target.to_string()),
        None if location.is_open() => ModalPhase::Creating,
        None => ModalPhase::Closed,
    };

    let (content_type, content_type_locked) = match &phase {
        ModalPhase::Editing(target) => (Choice::Selected(target.clone()), true),
        _ => (local_content_type.clone(), false),
    };

    ResolvedMode {
        settings_type,
        phase,
        content_type,
        content_type_locked,
    }
}
