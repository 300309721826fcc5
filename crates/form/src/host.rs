//! Host-side contract of the modal form
//!
//! The form owns only transient edit state. Everything else, including the
//! settings it projects and the navigation that opens and closes it, belongs
//! to the host and is reached through [`FormHost`].

use crate::navigation::Location;
use serde::Serialize;
use sitemap_core::{FieldValue, SettingsType};
use sitemap_schema::{FieldCatalog, SettingsRepository};
use tracing::{debug, info};

// ============================================================================
// Events
// ============================================================================

/// A single field mutation reported to the host
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    pub settings_type: SettingsType,
    /// Entity or path the value belongs to; `None` for global settings
    pub target: Option<String>,
    pub key: String,
    pub value: FieldValue,
}

impl FieldChange {
    /// A change scoped to a target
    pub fn scoped(
        settings_type: SettingsType,
        target: impl Into<String>,
        key: impl Into<String>,
        value: FieldValue,
    ) -> Self {
        Self {
            settings_type,
            target: Some(target.into()),
            key: key.into(),
            value,
        }
    }

    /// A change to a setting not tied to a target
    pub fn global(settings_type: SettingsType, key: impl Into<String>, value: FieldValue) -> Self {
        Self {
            settings_type,
            target: None,
            key: key.into(),
            value,
        }
    }
}

/// Request to put every catalog field of a target back to its default
#[derive(Debug, Clone, Copy)]
pub struct DefaultsReset<'a> {
    pub settings_type: SettingsType,
    pub target: &'a str,
    pub catalog: &'a FieldCatalog,
}

impl<'a> DefaultsReset<'a> {
    pub fn new(settings_type: SettingsType, target: &'a str, catalog: &'a FieldCatalog) -> Self {
        Self {
            settings_type,
            target,
            catalog,
        }
    }

    /// One change per catalog field, carrying its default, in declaration order
    pub fn changes(&self) -> impl Iterator<Item = FieldChange> + 'a {
        let settings_type = self.settings_type;
        let target = self.target;
        self.catalog
            .iter()
            .map(move |spec| {
                FieldChange::scoped(settings_type, target, &spec.name, spec.default.clone())
            })
    }
}

/// What the form hands over on commit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub settings_type: SettingsType,
    pub target: String,
    pub uid_field: Option<String>,
    pub area: String,
}

// ============================================================================
// FormHost Trait
// ============================================================================

/// Callbacks and shared state supplied by the embedding page
pub trait FormHost {
    /// Current settings, read back to project field values
    fn settings(&self) -> &dyn SettingsRepository;

    /// Current navigation location
    fn location(&self) -> &Location;

    /// Replace the navigation location
    ///
    /// The form only observes locations when one of its methods runs. A host
    /// that navigates on its own must call [`ModalForm::sync`] after each
    /// change, or an open, close and reopen in between goes unnoticed.
    ///
    /// [`ModalForm::sync`]: crate::ModalForm::sync
    fn navigate(&mut self, location: Location);

    /// A field changed
    fn on_change(&mut self, change: FieldChange);

    /// The edit was cancelled; discard unsaved settings of the current target
    fn on_cancel(&mut self);

    /// The target switched; reset its settings to defaults
    ///
    /// The default implementation reports one cancel followed by one change
    /// per catalog field. Hosts with a transactional store should override
    /// it and apply the reset in a single step.
    fn on_reset(&mut self, reset: DefaultsReset<'_>) {
        self.on_cancel();
        for change in reset.changes() {
            self.on_change(change);
        }
    }

    /// The operator committed the form
    fn on_submit(&mut self, submission: Submission);
}

// ============================================================================
// SettingsHost
// ============================================================================

/// Host backed by a settings repository with a saved and a working copy
///
/// Changes land in the working copy. Cancel reverts the target being edited
/// to its saved values; other targets and global settings keep their pending
/// changes. Submit promotes the whole working copy.
#[derive(Debug, Clone, Default)]
pub struct SettingsHost<R> {
    saved: R,
    working: R,
    /// Target the last scoped change or reset applied to
    active: Option<(SettingsType, String)>,
    location: Location,
    submissions: Vec<Submission>,
}

impl<R: SettingsRepository + Clone> SettingsHost<R> {
    /// Start from previously saved settings
    pub fn new(saved: R) -> Self {
        Self {
            working: saved.clone(),
            saved,
            active: None,
            location: Location::closed(),
            submissions: Vec::new(),
        }
    }

    /// Settings as last submitted
    pub fn saved(&self) -> &R {
        &self.saved
    }

    /// Settings including unsaved changes
    pub fn working(&self) -> &R {
        &self.working
    }

    /// Every submission received, oldest first
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Put the active target back to its saved values
    fn revert_active(&mut self) {
        let Some((settings_type, target)) = self.active.take() else {
            return;
        };
        debug!(%settings_type, key = %target, "Reverting unsaved target settings");
        match self.saved.target_settings(settings_type, &target) {
            Some(values) => self.working.replace_target(settings_type, &target, values.clone()),
            None => self.working.clear(settings_type, &target),
        }
    }
}

impl<R: SettingsRepository + Clone> FormHost for SettingsHost<R> {
    fn settings(&self) -> &dyn SettingsRepository {
        &self.working
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn navigate(&mut self, location: Location) {
        debug!(?location, "Navigating");
        self.location = location;
    }

    fn on_change(&mut self, change: FieldChange) {
        match &change.target {
            Some(target) => {
                self.active = Some((change.settings_type, target.clone()));
                self.working
                    .set(change.settings_type, target, &change.key, change.value)
            }
            None => self.working.set_global(&change.key, change.value),
        }
    }

    fn on_cancel(&mut self) {
        self.revert_active();
    }

    fn on_reset(&mut self, reset: DefaultsReset<'_>) {
        self.revert_active();
        self.working.reset_to_defaults(reset.settings_type, reset.target, reset.catalog);
        self.active = Some((reset.settings_type, reset.target.to_string()));
    }

    fn on_submit(&mut self, submission: Submission) {
        info!(
            settings_type = %submission.settings_type,
            key = %submission.target,
            "Settings submitted"
        );
        self.saved = self.working.clone();
        self.active = None;
        self.submissions.push(submission);
    }
}

// ============================================================================
// Tests
// ============================================================================
