//! Field value and state projection
//!
//! Everything here is a pure function of a [`FormSnapshot`] and the host's
//! settings. The snapshot is rebuilt for every render; nothing in this module
//! mutates state.

use crate::mode::ModalPhase;
use crate::uid::UidCandidates;
use serde::Serialize;
use sitemap_core::{Choice, FieldValue, InputKind, SettingsType};
use sitemap_schema::{AREA_KEY, FieldCatalog, INCLUDE_HOMEPAGE_KEY, SettingsRepository};

// ============================================================================
// FormSnapshot
// ============================================================================

/// Immutable view of every input the derived state depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub settings_type: SettingsType,
    pub phase: ModalPhase,
    /// Effective content type (the edit target when editing)
    pub content_type: Choice<String>,
    pub uid_candidates: UidCandidates,
    /// Effective identifier-field selection
    pub selected_uid_field: Choice<String>,
    /// Locally typed area, used while creating
    pub area: String,
}

impl FormSnapshot {
    pub fn is_collection(&self) -> bool {
        self.settings_type.is_collection()
    }

    /// Whether the identifier-field requirement of Collection mode is unmet
    fn uid_missing(&self) -> bool {
        self.is_collection() && self.selected_uid_field.is_unselected()
    }

    /// Whether catalog fields accept input
    ///
    /// Disabled while no content type is chosen (the placeholder included)
    /// and, in Collection mode, while no identifier field is chosen.
    pub fn fields_enabled(&self) -> bool {
        self.phase.is_open() && self.content_type.is_selected() && !self.uid_missing()
    }

    /// Whether the area input accepts input
    ///
    /// Area only exists in Collection mode and follows the same
    /// requirements as the catalog fields there.
    pub fn area_enabled(&self) -> bool {
        self.is_collection() && self.fields_enabled()
    }

    /// Whether the identifier-field select is shown
    pub fn uid_select_visible(&self) -> bool {
        self.is_collection() && !self.uid_candidates.is_empty()
    }

    /// Whether the identifier-field select accepts input
    pub fn uid_select_enabled(&self) -> bool {
        self.phase.is_open() && self.is_collection() && self.uid_candidates.needs_choice()
    }
}

// ============================================================================
// Value lookup
// ============================================================================

/// Resolve the value of `field` for the snapshot's content type
///
/// Stored values win; otherwise the catalog default. Fields unknown to the
/// catalog with nothing stored resolve to `None`, never to a default.
pub fn value_of(
    snapshot: &FormSnapshot,
    settings: &dyn SettingsRepository,
    catalog: &FieldCatalog,
    field: &str,
) -> Option<FieldValue> {
    let stored = snapshot
        .content_type
        .as_deref()
        .and_then(|target| settings.get(snapshot.settings_type, target, field));

    match stored {
        Some(value) => Some(value.clone()),
        None => catalog.get(field).map(|spec| spec.default.clone()),
    }
}

/// Area shown in the input: stored value while editing, local text otherwise
pub fn area_value(snapshot: &FormSnapshot, settings: &dyn SettingsRepository) -> String {
    match (&snapshot.phase, snapshot.content_type.as_deref()) {
        (ModalPhase::Editing(_), Some(target)) => settings
            .get(snapshot.settings_type, target, AREA_KEY)
            .map(FieldValue::to_string)
            .unwrap_or_default(),
        _ => snapshot.area.clone(),
    }
}

/// Global include-homepage flag, defaulting to off
pub fn include_homepage(settings: &dyn SettingsRepository) -> bool {
    settings
        .global(INCLUDE_HOMEPAGE_KEY)
        .and_then(FieldValue::as_bool)
        .unwrap_or(false)
}

// ============================================================================
// FieldView
// ============================================================================

/// Render-ready state of one catalog field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub name: String,
    pub label: String,
    pub description: String,
    pub kind: InputKind,
    pub options: Vec<String>,
    pub style_name: String,
    pub value: Option<FieldValue>,
    pub enabled: bool,
}

/// Project every catalog field, in declaration order
pub fn project_fields(
    snapshot: &FormSnapshot,
    settings: &dyn SettingsRepository,
    catalog: &FieldCatalog,
) -> Vec<FieldView> {
    let enabled = snapshot.fields_enabled();
    catalog
        .iter()
        .map(|spec| FieldView {
            name: spec.name.clone(),
            label: spec.label.clone(),
            description: spec.description.clone(),
            kind: spec.kind,
            options: spec.options.clone(),
            style_name: spec.style_name.clone(),
            value: value_of(snapshot, settings, catalog, &spec.name),
            enabled,
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
