//! Interaction scripts
//!
//! A script is a JSON list of operator interactions replayed against a
//! [`ModalForm`], one step at a time, with the outcome of each recorded.

use serde::{Deserialize, Serialize};
use sitemap_core::{
    Choice, FieldValue, JsonDocument, SettingsType, SitemapError, SitemapResult, Validatable,
};
use sitemap_form::{
    CloseTrigger, FormHost, InputOutcome, Location, ModalForm, ModalView, SettingsHost, Submission,
};
use sitemap_schema::{SettingsDocument, UidClassifier};
use tracing::debug;

// ============================================================================
// Script
// ============================================================================

/// One operator interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    /// The host changes its location
    Navigate(Location),
    /// Pick from the content-type select; `null` picks the placeholder
    SelectEntity(Option<String>),
    /// Set the custom URL input to this value
    TypePath(String),
    /// Pick from the UID select; `null` picks the placeholder
    SelectUidField(Option<String>),
    /// Change a catalog field
    ChangeField { name: String, value: FieldValue },
    /// Set the area input to this value
    TypeArea(String),
    /// Flip the include-homepage toggle
    IncludeHomepage(bool),
    /// Press save
    Submit,
    /// Dismiss the modal
    Close(CloseTrigger),
}

/// A replayable list of interactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub settings_type: SettingsType,
    pub steps: Vec<Step>,
}

impl Validatable for Script {
    fn validate(&self) -> SitemapResult<()> {
        if self.steps.is_empty() {
            return Err(SitemapError::validation("Script has no steps"));
        }
        Ok(())
    }
}

impl JsonDocument for Script {}

// ============================================================================
// Replay
// ============================================================================

/// What a step did
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum StepOutcome {
    /// The host location changed
    Navigated { open: bool },
    /// An interaction was handled by the form
    Input { outcome: InputOutcome },
}

/// One replayed step and its outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub step: Step,
    pub outcome: StepOutcome,
}

/// Everything a replay produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub steps: Vec<StepReport>,
    /// The modal as it stands after the last step
    pub view: ModalView,
    pub submissions: Vec<Submission>,
    /// Settings as last submitted
    pub saved: SettingsDocument,
}

/// Apply a single step
pub fn apply_step<C: UidClassifier>(
    form: &mut ModalForm<C>,
    host: &mut SettingsHost<SettingsDocument>,
    step: &Step,
) -> StepOutcome {
    let input = |outcome: InputOutcome| StepOutcome::Input { outcome };
    match step {
        Step::Navigate(location) => {
            host.navigate(location.clone());
            form.sync(host);
            StepOutcome::Navigated {
                open: location.is_open(),
            }
        }
        Step::SelectEntity(api_id) => {
            let choice = Choice::from(api_id.as_deref());
            input(form.select_entity(host, choice))
        }
        Step::TypePath(path) => input(form.type_custom_path(host, path)),
        Step::SelectUidField(field) => {
            let choice = Choice::from(field.as_deref());
            input(form.select_uid_field(host, choice))
        }
        Step::ChangeField { name, value } => input(form.change_field(host, name, value.clone())),
        Step::TypeArea(area) => input(form.type_area(host, area)),
        Step::IncludeHomepage(include) => input(form.set_include_homepage(host, *include)),
        Step::Submit => input(form.submit(host)),
        Step::Close(trigger) => input(form.close(host, *trigger)),
    }
}

/// Replay every step of a script
pub fn replay<C: UidClassifier>(
    form: &mut ModalForm<C>,
    host: &mut SettingsHost<SettingsDocument>,
    script: &Script,
) -> ReplayReport {
    let steps = script
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let outcome = apply_step(form, host, step);
            debug!(index, ?step, ?outcome, "Replayed step");
            StepReport {
                index,
                step: step.clone(),
                outcome,
            }
        })
        .collect();

    ReplayReport {
        steps,
        view: form.view(host),
        submissions: host.submissions().to_vec(),
        saved: host.saved().clone(),
    }
}

// ============================================================================
// Tests
// ============================================================================
