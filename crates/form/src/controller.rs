//! The modal form controller
//!
//! [`ModalForm`] owns the transient edit state of the modal and turns
//! operator interactions into host callbacks. Derived state (mode, candidate
//! list, enablement, submit gate) is recomputed from a [`FormSnapshot`] on
//! every call instead of being stored.
//!
//! Interactions never fail. An interaction the current state does not allow
//! returns [`InputOutcome::Disabled`]; input that breaks a field's rules
//! returns [`InputOutcome::Discarded`] and leaves the previous value in
//! place.

use crate::gate::{self, CloseTrigger};
use crate::host::{DefaultsReset, FieldChange, FormHost, Submission};
use crate::mode::{self, ModalPhase, ResolvedMode};
use crate::navigation::Location;
use crate::projection::{self, FormSnapshot};
use crate::uid::UidCandidates;
use crate::view::{
    AreaInput, ContentTypeInput, ContentTypeOption, HEADER_TITLE_KEY, ModalView, TITLE_KEY,
    UidFieldInput,
};
use serde::Serialize;
use sitemap_core::{Choice, FieldValue, SettingsType, is_valid_path};
use sitemap_schema::{
    AREA_KEY, AttributeTypeClassifier, EntityList, FieldCatalog, INCLUDE_HOMEPAGE_KEY,
    SettingsRepository, UID_FIELD_KEY, UidClassifier,
};
use tracing::{debug, info, warn};

// ============================================================================
// Types
// ============================================================================

/// What happened to an interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InputOutcome {
    /// The interaction took effect
    Applied,
    /// The input broke a field rule and was dropped
    Discarded,
    /// The control is not interactive in the current state
    Disabled,
}

impl InputOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, InputOutcome::Applied)
    }
}

/// Phase change observed while syncing with the host location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    Opened(ModalPhase),
    Closed,
}

/// Transient state owned by the form, reset on open and close
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Locally chosen entity or typed path
    pub content_type: Choice<String>,
    /// Locally typed area
    pub area: String,
    /// Candidates of the locally chosen entity
    pub uid_fields: UidCandidates,
    /// Locally chosen identifier field
    pub selected_uid_field: Choice<String>,
    /// Reserved; always false
    pub exclude: bool,
}

// ============================================================================
// ModalForm
// ============================================================================

/// Controller of the sitemap entry modal
#[derive(Debug, Clone)]
pub struct ModalForm<C = AttributeTypeClassifier> {
    settings_type: SettingsType,
    entities: EntityList,
    catalog: FieldCatalog,
    classifier: C,
    state: FormState,
    phase: ModalPhase,
}

impl ModalForm<AttributeTypeClassifier> {
    /// Create a controller using the sitemap catalog and `uid` attribute classification
    pub fn new(settings_type: SettingsType, entities: EntityList) -> Self {
        Self {
            settings_type,
            entities,
            catalog: FieldCatalog::sitemap(),
            classifier: AttributeTypeClassifier,
            state: FormState::default(),
            phase: ModalPhase::Closed,
        }
    }
}

impl<C: UidClassifier> ModalForm<C> {
    /// Swap the identifier-field classifier
    pub fn with_classifier<D: UidClassifier>(self, classifier: D) -> ModalForm<D> {
        ModalForm {
            settings_type: self.settings_type,
            entities: self.entities,
            catalog: self.catalog,
            classifier,
            state: self.state,
            phase: self.phase,
        }
    }

    pub fn settings_type(&self) -> SettingsType {
        self.settings_type
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    pub fn entities(&self) -> &EntityList {
        &self.entities
    }

    // ========================================================================
    // Derived state
    // ========================================================================

    /// Resolve the mode for a location
    pub fn resolve(&self, location: &Location) -> ResolvedMode {
        mode::resolve(location, &self.state.content_type, self.settings_type)
    }

    /// Immutable snapshot of everything derived state depends on
    pub fn snapshot<H: FormHost + ?Sized>(&self, host: &H) -> FormSnapshot {
        let mode = self.resolve(host.location());

        let uid_candidates = match (&mode.phase, self.settings_type) {
            (ModalPhase::Editing(target), SettingsType::Collection) => {
                UidCandidates::derive(target, &self.entities, &self.classifier)
            }
            (_, SettingsType::Collection) => self.state.uid_fields.clone(),
            (_, SettingsType::Custom) => UidCandidates::default(),
        };
        let selected_uid_field = self.effective_uid(&mode, &uid_candidates, host.settings());

        FormSnapshot {
            settings_type: self.settings_type,
            phase: mode.phase,
            content_type: mode.content_type,
            uid_candidates,
            selected_uid_field,
            area: self.state.area.clone(),
        }
    }

    /// Identifier field in force for this render
    ///
    /// While editing, the stored setting wins, then the local choice, then
    /// the single candidate if there is exactly one.
    fn effective_uid(
        &self,
        mode: &ResolvedMode,
        candidates: &UidCandidates,
        settings: &dyn SettingsRepository,
    ) -> Choice<String> {
        if !self.settings_type.is_collection() {
            return Choice::Unselected;
        }
        match &mode.phase {
            ModalPhase::Editing(target) => {
                let stored = settings
                    .get(self.settings_type, target, UID_FIELD_KEY)
                    .filter(|value| !value.is_blank())
                    .map(FieldValue::to_string);
                Choice::from(stored)
                    .or_else(|| self.state.selected_uid_field.clone())
                    .or_else(|| candidates.auto_selection())
            }
            _ => self.state.selected_uid_field.clone(),
        }
    }

    /// Whether the submit control is enabled
    pub fn can_submit<H: FormHost + ?Sized>(&self, host: &H) -> bool {
        gate::can_submit(&self.snapshot(host))
    }

    /// Build the render-ready view
    pub fn view<H: FormHost + ?Sized>(&self, host: &H) -> ModalView {
        let snapshot = self.snapshot(host);
        let settings = host.settings();

        let options = if self.settings_type.is_collection() {
            let mut options = vec![ContentTypeOption::placeholder()];
            options.extend(
                self.entities
                    .iter()
                    .filter(|entity| {
                        snapshot.content_type.as_deref() == Some(entity.api_id.as_str())
                            || !settings.contains_target(self.settings_type, &entity.api_id)
                    })
                    .map(|entity| ContentTypeOption {
                        value: Choice::Selected(entity.api_id.clone()),
                        label: entity.label().to_string(),
                    }),
            );
            options
        } else {
            Vec::new()
        };

        let uid_field = snapshot.uid_select_visible().then(|| UidFieldInput {
            options: snapshot.uid_candidates.options(),
            value: snapshot.selected_uid_field.clone(),
            enabled: snapshot.uid_select_enabled(),
        });

        let area = self.settings_type.is_collection().then(|| AreaInput {
            value: projection::area_value(&snapshot, settings),
            enabled: snapshot.area_enabled(),
        });

        let include_homepage =
            (!self.settings_type.is_collection()).then(|| projection::include_homepage(settings));

        let submit_block = gate::submit_block(&snapshot);

        ModalView {
            is_open: snapshot.phase.is_open(),
            phase: snapshot.phase.clone(),
            settings_type: self.settings_type,
            header_key: HEADER_TITLE_KEY,
            title_key: TITLE_KEY,
            description_key: snapshot
                .phase
                .is_creating()
                .then(|| self.settings_type.description_key()),
            content_type: ContentTypeInput {
                value: snapshot.content_type.clone(),
                locked: snapshot.phase.edit_target().is_some(),
                options,
            },
            uid_field,
            fields: projection::project_fields(&snapshot, settings, &self.catalog),
            area,
            include_homepage,
            submit_enabled: submit_block.is_none(),
            submit_block,
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Follow the host location, running open and close transitions
    ///
    /// Only the phase at call time is compared, so hosts that navigate on
    /// their own call this after every location change. Opening resets
    /// local state. Opening on an existing Collection entry
    /// whose identifier field is not stored yet propagates the single
    /// candidate when there is one. A close the form did not initiate is
    /// handled like a cancel.
    pub fn sync<H: FormHost + ?Sized>(&mut self, host: &mut H) -> Transition {
        let mode = self.resolve(host.location());
        if mode.phase == self.phase {
            return Transition::Unchanged;
        }

        let previous = std::mem::replace(&mut self.phase, mode.phase.clone());
        self.state = FormState::default();

        if !mode.phase.is_open() {
            info!(?previous, "Modal closed by navigation");
            host.on_cancel();
            return Transition::Closed;
        }

        info!(phase = ?mode.phase, settings_type = %self.settings_type, "Modal opened");

        if let ModalPhase::Editing(target) = &mode.phase {
            if self.settings_type.is_collection() {
                let candidates = UidCandidates::derive(target, &self.entities, &self.classifier);
                let stored = host
                    .settings()
                    .get(self.settings_type, target, UID_FIELD_KEY)
                    .is_some_and(|value| !value.is_blank());
                if let (false, Choice::Selected(uid)) = (stored, candidates.auto_selection()) {
                    debug!(key = %target, uid = %uid, "Propagating single UID candidate");
                    host.on_change(FieldChange::scoped(
                        self.settings_type,
                        target,
                        UID_FIELD_KEY,
                        FieldValue::String(uid),
                    ));
                }
                self.state.uid_fields = candidates;
            }
        }

        Transition::Opened(mode.phase)
    }

    // ========================================================================
    // Interactions
    // ========================================================================

    /// Pick an entity from the content-type select (Collection mode)
    ///
    /// Picking an entity resets its settings to defaults through the host,
    /// then propagates a single identifier candidate and clears the area.
    /// Picking the placeholder only cancels.
    pub fn select_entity<H: FormHost + ?Sized>(
        &mut self,
        host: &mut H,
        choice: Choice<&str>,
    ) -> InputOutcome {
        self.sync(host);
        let mode = self.resolve(host.location());
        if !mode.is_open() || !self.settings_type.is_collection() || mode.content_type_locked {
            return InputOutcome::Disabled;
        }

        let api_id = match choice {
            Choice::Unselected => {
                debug!("Content type placeholder selected");
                self.state = FormState::default();
                host.on_cancel();
                return InputOutcome::Applied;
            }
            Choice::Selected(api_id) => api_id,
        };

        if self.entities.find(api_id).is_none() {
            warn!(entity = api_id, "Ignoring selection of unknown entity");
            return InputOutcome::Discarded;
        }

        debug!(entity = api_id, "Switching content type");
        self.state.content_type = Choice::Selected(api_id.to_string());
        self.state.selected_uid_field = Choice::Unselected;

        host.on_reset(DefaultsReset::new(self.settings_type, api_id, &self.catalog));

        let candidates = UidCandidates::derive(api_id, &self.entities, &self.classifier);
        if let Choice::Selected(uid) = candidates.auto_selection() {
            self.state.selected_uid_field = Choice::Selected(uid.clone());
            host.on_change(FieldChange::scoped(
                self.settings_type,
                api_id,
                UID_FIELD_KEY,
                FieldValue::String(uid),
            ));
        }
        self.state.uid_fields = candidates;

        self.state.area.clear();
        host.on_change(FieldChange::scoped(
            self.settings_type,
            api_id,
            AREA_KEY,
            FieldValue::text(""),
        ));

        InputOutcome::Applied
    }

    /// Type into the custom URL input (custom mode)
    ///
    /// `input` is the whole new value of the input. A value with a
    /// character outside the path class is dropped.
    pub fn type_custom_path<H: FormHost + ?Sized>(
        &mut self,
        host: &mut H,
        input: &str,
    ) -> InputOutcome {
        self.sync(host);
        let mode = self.resolve(host.location());
        if !mode.is_open() || self.settings_type.is_collection() || mode.content_type_locked {
            return InputOutcome::Disabled;
        }

        if !is_valid_path(input) {
            warn!(input, kept = self.state.content_type.as_str(), "Discarding path input");
            return InputOutcome::Discarded;
        }

        self.state.content_type = Choice::from_text(input);
        if input.is_empty() {
            host.on_cancel();
        } else {
            host.on_reset(DefaultsReset::new(self.settings_type, input, &self.catalog));
        }
        InputOutcome::Applied
    }

    /// Pick from the identifier-field select
    pub fn select_uid_field<H: FormHost + ?Sized>(
        &mut self,
        host: &mut H,
        choice: Choice<&str>,
    ) -> InputOutcome {
        self.sync(host);
        let snapshot = self.snapshot(host);
        if !snapshot.uid_select_enabled() {
            return InputOutcome::Disabled;
        }
        let Some(target) = snapshot.content_type.as_deref() else {
            return InputOutcome::Disabled;
        };

        let value = match choice {
            Choice::Selected(field) if !snapshot.uid_candidates.contains(field) => {
                warn!(field, "Ignoring unknown UID field");
                return InputOutcome::Discarded;
            }
            Choice::Selected(field) => FieldValue::text(field),
            Choice::Unselected => FieldValue::Null,
        };

        self.state.selected_uid_field = choice.map(str::to_string);
        host.on_change(FieldChange::scoped(
            self.settings_type,
            target,
            UID_FIELD_KEY,
            value,
        ));
        InputOutcome::Applied
    }

    /// Change a catalog field
    pub fn change_field<H: FormHost + ?Sized>(
        &mut self,
        host: &mut H,
        name: &str,
        value: FieldValue,
    ) -> InputOutcome {
        self.sync(host);
        let snapshot = self.snapshot(host);

        let Some(spec) = self.catalog.get(name) else {
            warn!(field = name, "Ignoring change of undeclared field");
            return InputOutcome::Discarded;
        };
        if !snapshot.fields_enabled() {
            return InputOutcome::Disabled;
        }
        let Some(target) = snapshot.content_type.as_deref() else {
            return InputOutcome::Disabled;
        };
        if !spec.accepts(&value) {
            warn!(field = name, %value, "Discarding value outside the field options");
            return InputOutcome::Discarded;
        }

        host.on_change(FieldChange::scoped(self.settings_type, target, name, value));
        InputOutcome::Applied
    }

    /// Type into the area input (Collection mode)
    pub fn type_area<H: FormHost + ?Sized>(&mut self, host: &mut H, input: &str) -> InputOutcome {
        self.sync(host);
        let snapshot = self.snapshot(host);
        if !snapshot.area_enabled() {
            return InputOutcome::Disabled;
        }
        let Some(target) = snapshot.content_type.as_deref() else {
            return InputOutcome::Disabled;
        };
        if !is_valid_path(input) {
            warn!(input, kept = %self.state.area, "Discarding area input");
            return InputOutcome::Discarded;
        }

        self.state.area = input.to_string();
        host.on_change(FieldChange::scoped(
            self.settings_type,
            target,
            AREA_KEY,
            FieldValue::text(input),
        ));
        InputOutcome::Applied
    }

    /// Flip the include-homepage toggle (custom mode)
    pub fn set_include_homepage<H: FormHost + ?Sized>(
        &mut self,
        host: &mut H,
        include: bool,
    ) -> InputOutcome {
        self.sync(host);
        let mode = self.resolve(host.location());
        if !mode.is_open() || self.settings_type.is_collection() {
            return InputOutcome::Disabled;
        }
        host.on_change(FieldChange::global(
            self.settings_type,
            INCLUDE_HOMEPAGE_KEY,
            FieldValue::Bool(include),
        ));
        InputOutcome::Applied
    }

    /// Commit the form
    pub fn submit<H: FormHost + ?Sized>(&mut self, host: &mut H) -> InputOutcome {
        self.sync(host);
        let snapshot = self.snapshot(host);
        if let Some(block) = gate::submit_block(&snapshot) {
            debug!(%block, "Submit is disabled");
            return InputOutcome::Disabled;
        }

        let area = if self.settings_type.is_collection() {
            projection::area_value(&snapshot, host.settings())
        } else {
            String::new()
        };
        let submission = Submission {
            settings_type: self.settings_type,
            target: snapshot.content_type.as_str().to_string(),
            uid_field: snapshot.selected_uid_field.clone().into_option(),
            area,
        };

        info!(key = %submission.target, settings_type = %self.settings_type, "Committing");
        host.on_submit(submission);

        self.state = FormState::default();
        self.phase = ModalPhase::Closed;
        host.navigate(Location::closed());
        InputOutcome::Applied
    }

    /// Dismiss the modal without saving
    pub fn close<H: FormHost + ?Sized>(
        &mut self,
        host: &mut H,
        trigger: CloseTrigger,
    ) -> InputOutcome {
        if self.sync(host) == Transition::Closed {
            return InputOutcome::Applied;
        }
        if !self.phase.is_open() {
            return InputOutcome::Disabled;
        }

        info!(?trigger, "Cancelling");
        host.on_cancel();

        self.state = FormState::default();
        self.phase = ModalPhase::Closed;
        host.navigate(Location::closed());
        InputOutcome::Applied
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SettingsHost;
    use pretty_assertions::assert_eq;
    use sitemap_schema::{Attribute, SelectableEntity, SettingsDocument};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Change(FieldChange),
        Cancel,
        Submit(Submission),
    }

    /// Host that records every callback and applies changes to a document
    #[derive(Default)]
    struct RecordingHost {
        settings: SettingsDocument,
        location: Location,
        events: Vec<Event>,
    }

    impl RecordingHost {
        fn at(location: Location) -> Self {
            Self {
                location,
                ..Self::default()
            }
        }

        fn take_events(&mut self) -> Vec<Event> {
            std::mem::take(&mut self.events)
        }

        fn cancels(&self) -> usize {
            self.events.iter().filter(|e| **e == Event::Cancel).count()
        }
    }

    impl FormHost for RecordingHost {
        fn settings(&self) -> &dyn SettingsRepository {
            &self.settings
        }

        fn location(&self) -> &Location {
            &self.location
        }

        fn navigate(&mut self, location: Location) {
            self.location = location;
        }

        fn on_change(&mut self, change: FieldChange) {
            if let Some(target) = &change.target {
                self.settings
                    .set(change.settings_type, target, &change.key, change.value.clone());
            }
            self.events.push(Event::Change(change));
        }

        fn on_cancel(&mut self) {
            self.events.push(Event::Cancel);
        }

        fn on_submit(&mut self, submission: Submission) {
            self.events.push(Event::Submit(submission));
        }
    }

    fn entities() -> EntityList {
        EntityList::new(vec![
            SelectableEntity::new("article")
                .with_display_name("Article")
                .with_attribute("title", Attribute::new("string"))
                .with_attribute("slug", Attribute::uid())
                .with_attribute("id", Attribute::uid()),
            SelectableEntity::new("page")
                .with_display_name("Page")
                .with_attribute("id", Attribute::uid()),
            SelectableEntity::new("tag").with_attribute("name", Attribute::new("string")),
        ])
    }

    fn collection() -> ModalForm {
        ModalForm::new(SettingsType::Collection, entities())
    }

    fn custom() -> ModalForm {
        ModalForm::new(SettingsType::Custom, entities())
    }

    fn change(target: &str, key: &str, value: FieldValue) -> Event {
        Event::Change(FieldChange::scoped(SettingsType::Collection, target, key, value))
    }

    #[test]
    fn test_sync_opens_and_resets_state() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));

        assert_eq!(form.sync(&mut host), Transition::Opened(ModalPhase::Creating));
        assert_eq!(form.sync(&mut host), Transition::Unchanged);
        assert_eq!(form.state(), &FormState::default());
        assert!(!form.state().exclude);
    }

    #[test]
    fn test_closed_form_disables_interactions() {
        let mut form = collection();
        let mut host = RecordingHost::default();

        assert_eq!(
            form.select_entity(&mut host, Choice::Selected("article")),
            InputOutcome::Disabled
        );
        assert_eq!(form.submit(&mut host), InputOutcome::Disabled);
        assert_eq!(
            form.close(&mut host, CloseTrigger::CancelButton),
            InputOutcome::Disabled
        );
        assert!(host.events.is_empty());
    }

    #[test]
    fn test_create_with_multiple_uid_candidates() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));

        assert!(form.select_entity(&mut host, Choice::Selected("article")).is_applied());

        let view = form.view(&host);
        let uid = view.uid_field.expect("uid select is shown");
        assert_eq!(
            uid.options,
            vec![
                Choice::Unselected,
                Choice::Selected("slug".to_string()),
                Choice::Selected("id".to_string()),
            ]
        );
        assert_eq!(uid.option_labels(), vec!["- Choose UID field -", "slug", "id"]);
        assert!(uid.enabled);
        assert!(!form.can_submit(&host));
        assert!(!view.submit_enabled);

        assert!(form.select_uid_field(&mut host, Choice::Selected("slug")).is_applied());
        assert!(form.can_submit(&host));
        assert_eq!(
            host.events.last(),
            Some(&change("article", UID_FIELD_KEY, FieldValue::text("slug")))
        );
    }

    #[test]
    fn test_unselecting_uid_blocks_submit_again() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.select_entity(&mut host, Choice::Selected("article"));
        form.select_uid_field(&mut host, Choice::Selected("id"));
        assert!(form.can_submit(&host));

        assert!(form.select_uid_field(&mut host, Choice::Unselected).is_applied());
        assert!(!form.can_submit(&host));
        assert_eq!(
            host.events.last(),
            Some(&change("article", UID_FIELD_KEY, FieldValue::Null))
        );
    }

    #[test]
    fn test_unknown_uid_field_is_discarded() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.select_entity(&mut host, Choice::Selected("article"));
        host.take_events();

        assert_eq!(
            form.select_uid_field(&mut host, Choice::Selected("title")),
            InputOutcome::Discarded
        );
        assert!(host.events.is_empty());
    }

    #[test]
    fn test_single_candidate_is_propagated_on_select() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));

        form.select_entity(&mut host, Choice::Selected("page"));

        assert_eq!(
            form.state().selected_uid_field,
            Choice::Selected("id".to_string())
        );
        assert!(host
            .events
            .contains(&change("page", UID_FIELD_KEY, FieldValue::text("id"))));
        let view = form.view(&host);
        let uid = view.uid_field.expect("uid select is shown");
        assert_eq!(uid.options, vec![Choice::Selected("id".to_string())]);
        assert!(!uid.enabled);
        assert!(form.can_submit(&host));
    }

    #[test]
    fn test_switching_entity_cancels_then_replays_defaults() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.select_entity(&mut host, Choice::Selected("article"));
        form.select_uid_field(&mut host, Choice::Selected("slug"));
        form.change_field(&mut host, "priority", FieldValue::text("0.9"));
        host.take_events();

        form.select_entity(&mut host, Choice::Selected("page"));

        let events = host.take_events();
        assert_eq!(
            events,
            vec![
                Event::Cancel,
                change("page", "priority", FieldValue::text("0.5")),
                change("page", "changefreq", FieldValue::text("monthly")),
                change("page", UID_FIELD_KEY, FieldValue::text("id")),
                change("page", AREA_KEY, FieldValue::text("")),
            ]
        );
    }

    #[test]
    fn test_switching_entity_resets_uid_selection() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.select_entity(&mut host, Choice::Selected("page"));
        assert!(form.state().selected_uid_field.is_selected());

        form.select_entity(&mut host, Choice::Selected("article"));
        assert!(form.state().selected_uid_field.is_unselected());
        assert_eq!(form.state().uid_fields.len(), 2);
    }

    #[test]
    fn test_placeholder_selection_only_cancels() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.select_entity(&mut host, Choice::Selected("article"));
        host.take_events();

        assert!(form.select_entity(&mut host, Choice::Unselected).is_applied());
        assert_eq!(host.take_events(), vec![Event::Cancel]);
        assert!(form.state().content_type.is_unselected());
        assert!(form.state().uid_fields.is_empty());
        assert!(form.view(&host).fields.iter().all(|f| !f.enabled));
    }

    #[test]
    fn test_unknown_entity_is_discarded() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));
        assert_eq!(
            form.select_entity(&mut host, Choice::Selected("missing")),
            InputOutcome::Discarded
        );
        assert!(host.events.is_empty());
    }

    #[test]
    fn test_edit_with_single_candidate() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::editing("page"));

        assert_eq!(
            form.sync(&mut host),
            Transition::Opened(ModalPhase::Editing("page".to_string()))
        );

        let snapshot = form.snapshot(&host);
        assert_eq!(snapshot.selected_uid_field, Choice::Selected("id".to_string()));
        assert_eq!(
            snapshot.uid_candidates.options(),
            vec![Choice::Selected("id".to_string())]
        );
        assert!(form.can_submit(&host));
        assert_eq!(
            host.events,
            vec![change("page", UID_FIELD_KEY, FieldValue::text("id"))]
        );
    }

    #[test]
    fn test_edit_keeps_stored_uid() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::editing("article"));
        host.settings
            .set(SettingsType::Collection, "article", UID_FIELD_KEY, "id".into());

        form.sync(&mut host);

        assert!(host.events.is_empty());
        let view = form.view(&host);
        assert_eq!(
            view.uid_field.map(|u| u.value),
            Some(Choice::Selected("id".to_string()))
        );
        assert!(view.submit_enabled);
        assert!(view.description_key.is_none());
        assert!(view.content_type.locked);
    }

    #[test]
    fn test_edit_with_unchosen_candidates_blocks_submit() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::editing("article"));
        form.sync(&mut host);

        assert!(!form.can_submit(&host));
        assert!(form.select_uid_field(&mut host, Choice::Selected("slug")).is_applied());
        assert!(form.can_submit(&host));
    }

    #[test]
    fn test_edit_locks_content_type() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::editing("page"));
        assert_eq!(
            form.select_entity(&mut host, Choice::Selected("article")),
            InputOutcome::Disabled
        );
        assert_eq!(form.snapshot(&host).content_type.as_deref(), Some("page"));

        let mut form = custom();
        let mut host = RecordingHost::at(Location::editing("/about"));
        assert_eq!(
            form.type_custom_path(&mut host, "/contact"),
            InputOutcome::Disabled
        );
    }

    #[test]
    fn test_custom_path_stops_at_disallowed_character() {
        let mut form = custom();
        let mut host = RecordingHost::at(Location::creating("?new"));

        let typed = "/blog/<script>";
        for end in 1..=typed.len() {
            form.type_custom_path(&mut host, &typed[..end]);
        }

        assert_eq!(form.state().content_type.as_deref(), Some("/blog/"));
        assert_eq!(form.snapshot(&host).content_type.as_deref(), Some("/blog/"));
    }

    #[test]
    fn test_rejected_keystroke_emits_nothing() {
        let mut form = custom();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.type_custom_path(&mut host, "/news");
        host.take_events();

        assert_eq!(
            form.type_custom_path(&mut host, "/news?"),
            InputOutcome::Discarded
        );
        assert!(host.events.is_empty());
        assert_eq!(form.state().content_type.as_deref(), Some("/news"));
    }

    #[test]
    fn test_custom_keystroke_resets_target() {
        let mut form = custom();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.type_custom_path(&mut host, "/n");

        let events = host.take_events();
        assert_eq!(events.first(), Some(&Event::Cancel));
        assert_eq!(events.len(), 1 + form.catalog().len());
        assert!(events[1..].iter().all(|e| matches!(
            e,
            Event::Change(c) if c.target.as_deref() == Some("/n")
                && c.settings_type == SettingsType::Custom
        )));
    }

    #[test]
    fn test_clearing_custom_path_cancels() {
        let mut form = custom();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.type_custom_path(&mut host, "/a");
        host.take_events();

        assert!(form.type_custom_path(&mut host, "").is_applied());
        assert_eq!(host.take_events(), vec![Event::Cancel]);
        assert!(!form.can_submit(&host));
    }

    #[test]
    fn test_custom_mode_submit_needs_only_path() {
        let mut form = custom();
        let mut host = RecordingHost::at(Location::creating("?new"));
        assert!(!form.can_submit(&host));
        form.type_custom_path(&mut host, "/about");
        assert!(form.can_submit(&host));
        assert!(form.view(&host).uid_field.is_none());
    }

    #[test]
    fn test_catalog_field_changes() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.select_entity(&mut host, Choice::Selected("article"));

        assert_eq!(
            form.change_field(&mut host, "priority", FieldValue::text("0.8")),
            InputOutcome::Disabled
        );

        form.select_uid_field(&mut host, Choice::Selected("slug"));
        host.take_events();

        assert!(form
            .change_field(&mut host, "priority", FieldValue::text("0.8"))
            .is_applied());
        assert_eq!(
            form.change_field(&mut host, "changefreq", FieldValue::text("sometimes")),
            InputOutcome::Discarded
        );
        assert_eq!(
            form.change_field(&mut host, "lastmod", FieldValue::text("now")),
            InputOutcome::Discarded
        );
        assert_eq!(
            host.take_events(),
            vec![change("article", "priority", FieldValue::text("0.8"))]
        );

        let view = form.view(&host);
        let priority = view.fields.iter().find(|f| f.name == "priority").unwrap();
        assert_eq!(priority.value, Some(FieldValue::text("0.8")));
        assert!(priority.enabled);
    }

    #[test]
    fn test_fields_disabled_without_content_type() {
        let mut form = collection();
        let host = RecordingHost::at(Location::creating("?new"));
        let view = form.view(&host);
        assert!(view.fields.iter().all(|f| !f.enabled));
        assert_eq!(view.submit_block, Some(gate::SubmitBlock::NoContentType));

        let mut host = host;
        assert_eq!(
            form.change_field(&mut host, "priority", FieldValue::text("0.8")),
            InputOutcome::Disabled
        );
    }

    #[test]
    fn test_area_input() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.select_entity(&mut host, Choice::Selected("page"));
        host.take_events();

        assert!(form.type_area(&mut host, "/docs").is_applied());
        assert_eq!(
            form.type_area(&mut host, "/docs#top"),
            InputOutcome::Discarded
        );
        assert_eq!(form.state().area, "/docs");
        assert_eq!(
            host.take_events(),
            vec![change("page", AREA_KEY, FieldValue::text("/docs"))]
        );
        assert_eq!(
            form.view(&host).area.map(|a| a.value),
            Some("/docs".to_string())
        );
    }

    #[test]
    fn test_area_disabled_until_uid_chosen_and_absent_in_custom() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.select_entity(&mut host, Choice::Selected("article"));
        assert_eq!(form.type_area(&mut host, "/x"), InputOutcome::Disabled);

        let mut form = custom();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.type_custom_path(&mut host, "/blog");
        assert_eq!(form.type_area(&mut host, "/x"), InputOutcome::Disabled);
        assert!(form.view(&host).area.is_none());
    }

    #[test]
    fn test_include_homepage_toggle() {
        let mut form = custom();
        let mut host = RecordingHost::at(Location::creating("?new"));
        assert_eq!(form.view(&host).include_homepage, Some(false));

        assert!(form.set_include_homepage(&mut host, true).is_applied());
        assert_eq!(
            host.events.last(),
            Some(&Event::Change(FieldChange::global(
                SettingsType::Custom,
                INCLUDE_HOMEPAGE_KEY,
                FieldValue::Bool(true),
            )))
        );

        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));
        assert_eq!(
            form.set_include_homepage(&mut host, true),
            InputOutcome::Disabled
        );
        assert!(form.view(&host).include_homepage.is_none());
    }

    #[test]
    fn test_cancel_resets_state_and_navigation() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.select_entity(&mut host, Choice::Selected("article"));
        assert!(!form.state().uid_fields.is_empty());
        host.take_events();

        assert!(form.close(&mut host, CloseTrigger::CancelButton).is_applied());

        assert_eq!(host.cancels(), 1);
        assert_eq!(host.events.len(), 1);
        assert!(form.state().content_type.is_unselected());
        assert!(form.state().uid_fields.is_empty());
        assert_eq!(host.location, Location::closed());
        assert!(!form.view(&host).is_open);
    }

    #[test]
    fn test_backdrop_and_toggle_cancel() {
        for trigger in [CloseTrigger::Backdrop, CloseTrigger::Toggle] {
            let mut form = custom();
            let mut host = RecordingHost::at(Location::creating("?new"));
            form.type_custom_path(&mut host, "/x");
            host.take_events();

            assert!(form.close(&mut host, trigger).is_applied());
            assert_eq!(host.take_events(), vec![Event::Cancel]);
            assert!(!host.location.is_open());
        }
    }

    #[test]
    fn test_navigation_away_cancels() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.select_entity(&mut host, Choice::Selected("page"));
        host.take_events();

        host.location = Location::closed();
        assert!(form.close(&mut host, CloseTrigger::Navigation).is_applied());
        assert_eq!(host.take_events(), vec![Event::Cancel]);
        assert_eq!(form.state(), &FormState::default());
    }

    #[test]
    fn test_submit_commits_and_closes() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.select_entity(&mut host, Choice::Selected("article"));
        assert_eq!(form.submit(&mut host), InputOutcome::Disabled);

        form.select_uid_field(&mut host, Choice::Selected("slug"));
        form.type_area(&mut host, "/news");
        host.take_events();

        assert!(form.submit(&mut host).is_applied());
        assert_eq!(
            host.take_events(),
            vec![Event::Submit(Submission {
                settings_type: SettingsType::Collection,
                target: "article".to_string(),
                uid_field: Some("slug".to_string()),
                area: "/news".to_string(),
            })]
        );
        assert!(form.state().content_type.is_unselected());
        assert!(form.state().area.is_empty());
        assert_eq!(host.location, Location::closed());
        assert_eq!(form.sync(&mut host), Transition::Unchanged);
    }

    #[test]
    fn test_content_type_options_skip_configured_entities() {
        let form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));
        host.settings
            .set(SettingsType::Collection, "tag", "priority", "0.5".into());

        let view = form.view(&host);
        let values: Vec<Option<&str>> = view
            .content_type
            .options
            .iter()
            .map(|o| o.value.as_deref())
            .collect();
        assert_eq!(values, vec![None, Some("article"), Some("page")]);
        assert_eq!(view.content_type.options[0].label, "- Choose Content Type -");
        assert_eq!(
            view.description_key,
            Some("sitemap.Modal.CollectionDescription")
        );
    }

    #[test]
    fn test_custom_classifier() {
        let mut form =
            collection().with_classifier(|_: &SelectableEntity| vec!["permalink".to_string()]);
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.select_entity(&mut host, Choice::Selected("tag"));
        assert_eq!(
            form.state().selected_uid_field,
            Choice::Selected("permalink".to_string())
        );
    }

    #[test]
    fn test_settings_host_full_flow() {
        let mut form = collection();
        let mut host = SettingsHost::new(SettingsDocument::new());
        host.navigate(Location::creating("?new"));

        form.select_entity(&mut host, Choice::Selected("article"));
        form.select_uid_field(&mut host, Choice::Selected("slug"));
        form.change_field(&mut host, "changefreq", FieldValue::text("daily"));
        assert!(form.submit(&mut host).is_applied());

        let saved = host.saved();
        assert_eq!(
            saved.get(SettingsType::Collection, "article", "changefreq"),
            Some(&FieldValue::text("daily"))
        );
        assert_eq!(
            saved.get(SettingsType::Collection, "article", "priority"),
            Some(&FieldValue::text("0.5"))
        );
        assert_eq!(
            saved.get(SettingsType::Collection, "article", UID_FIELD_KEY),
            Some(&FieldValue::text("slug"))
        );
        assert_eq!(host.submissions().len(), 1);
        assert!(!host.location().is_open());
    }

    #[test]
    fn test_settings_host_cancel_discards() {
        let mut form = collection();
        let mut host = SettingsHost::new(SettingsDocument::new());
        host.navigate(Location::creating("?new"));

        form.select_entity(&mut host, Choice::Selected("page"));
        assert!(host.working().contains_target(SettingsType::Collection, "page"));

        form.close(&mut host, CloseTrigger::CancelButton);
        assert!(!host.working().contains_target(SettingsType::Collection, "page"));
        assert!(host.submissions().is_empty());
    }

    #[test]
    fn test_settings_host_switch_reverts_previous_target_only() {
        let mut saved = SettingsDocument::new();
        saved.set(SettingsType::Collection, "tag", "priority", "0.9".into());
        let mut form = collection();
        let mut host = SettingsHost::new(saved);
        host.navigate(Location::creating("?new"));

        form.select_entity(&mut host, Choice::Selected("page"));
        form.change_field(&mut host, "priority", FieldValue::text("0.8"));
        form.select_entity(&mut host, Choice::Selected("article"));

        let working = host.working();
        assert!(!working.contains_target(SettingsType::Collection, "page"));
        assert_eq!(
            working.get(SettingsType::Collection, "article", "priority"),
            Some(&FieldValue::text("0.5"))
        );
        assert_eq!(
            working.get(SettingsType::Collection, "tag", "priority"),
            Some(&FieldValue::text("0.9"))
        );
    }

    #[test]
    fn test_settings_host_keeps_homepage_toggle_while_typing_path() {
        let mut form = custom();
        let mut host = SettingsHost::new(SettingsDocument::new());
        host.navigate(Location::creating("?new"));

        assert!(form.set_include_homepage(&mut host, true).is_applied());
        assert_eq!(form.view(&host).include_homepage, Some(true));

        form.type_custom_path(&mut host, "/a");
        form.type_custom_path(&mut host, "/ab");
        assert_eq!(form.view(&host).include_homepage, Some(true));
        assert!(!host.working().contains_target(SettingsType::Custom, "/a"));
        assert!(host.working().contains_target(SettingsType::Custom, "/ab"));

        form.close(&mut host, CloseTrigger::Backdrop);
        assert!(!host.working().contains_target(SettingsType::Custom, "/ab"));
        assert_eq!(form.view(&host).include_homepage, Some(true));
    }

    #[test]
    fn test_sync_after_each_navigation_sees_reopen() {
        let mut form = collection();
        let mut host = RecordingHost::at(Location::creating("?new"));
        form.select_entity(&mut host, Choice::Selected("article"));
        host.take_events();

        host.navigate(Location::closed());
        assert_eq!(form.sync(&mut host), Transition::Closed);
        host.navigate(Location::creating("?new"));
        assert_eq!(form.sync(&mut host), Transition::Opened(ModalPhase::Creating));

        assert_eq!(host.take_events(), vec![Event::Cancel]);
        assert!(form.state().content_type.is_unselected());
        assert!(form.state().uid_fields.is_empty());
    }
}
