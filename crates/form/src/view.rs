//! Render-ready description of the modal
//!
//! A [`ModalView`] is what a renderer needs to draw one frame: which inputs
//! are shown, what they contain and whether they accept input.

use crate::gate::SubmitBlock;
use crate::mode::ModalPhase;
use crate::projection::FieldView;
use serde::Serialize;
use sitemap_core::{CHOOSE_CONTENT_TYPE_LABEL, CHOOSE_UID_FIELD_LABEL, Choice, SettingsType};

/// Localization key of the modal header
pub const HEADER_TITLE_KEY: &str = "sitemap.Modal.HeaderTitle";

/// Localization key of the section title
pub const TITLE_KEY: &str = "sitemap.Modal.Title";

/// One entry of the content-type select
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentTypeOption {
    pub value: Choice<String>,
    pub label: String,
}

impl ContentTypeOption {
    /// The leading placeholder entry
    pub fn placeholder() -> Self {
        Self {
            value: Choice::Unselected,
            label: CHOOSE_CONTENT_TYPE_LABEL.to_string(),
        }
    }
}

/// The content-type select (Collection) or URL input (custom)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeInput {
    pub value: Choice<String>,
    pub locked: bool,
    /// Select entries; empty for the custom URL input
    pub options: Vec<ContentTypeOption>,
}

/// The identifier-field select
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UidFieldInput {
    pub options: Vec<Choice<String>>,
    pub value: Choice<String>,
    pub enabled: bool,
}

impl UidFieldInput {
    /// Labels of the options, with the placeholder label for `Unselected`
    pub fn option_labels(&self) -> Vec<&str> {
        self.options
            .iter()
            .map(|o| o.label(CHOOSE_UID_FIELD_LABEL))
            .collect()
    }
}

/// The area input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaInput {
    pub value: String,
    pub enabled: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalView {
    pub is_open: bool,
    pub phase: ModalPhase,
    pub settings_type: SettingsType,
    pub header_key: &'static str,
    pub title_key: &'static str,
    /// Shown only while creating
    pub description_key: Option<&'static str>,
    pub content_type: ContentTypeInput,
    /// Shown when the chosen entity has identifier candidates
    pub uid_field: Option<UidFieldInput>,
    pub fields: Vec<FieldView>,
    /// Collection mode only
    pub area: Option<AreaInput>,
    /// Custom mode only
    pub include_homepage: Option<bool>,
    pub submit_enabled: bool,
    pub submit_block: Option<SubmitBlock>,
}
