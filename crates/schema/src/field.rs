//! Statically declared sitemap fields
//!
//! Every configured entity or custom path carries the same set of sitemap
//! settings. The catalog declares them once, with their input kind, default
//! value, option list and layout hint.

use serde::{Deserialize, Serialize};
use sitemap_core::{FieldValue, InputKind};

/// Settings key of the identifier field selection
pub const UID_FIELD_KEY: &str = "uidField";

/// Settings key of the secondary path segment
pub const AREA_KEY: &str = "area";

/// Global settings key of the include-homepage toggle
pub const INCLUDE_HOMEPAGE_KEY: &str = "includeHomepage";

/// Layout hint used by every catalog field
pub const FULL_WIDTH: &str = "col-12";

// ============================================================================
// FieldSpec
// ============================================================================

/// Declaration of a single configurable field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Settings key
    pub name: String,

    /// Label shown next to the input
    pub label: String,

    /// Help text shown below the input
    #[serde(default)]
    pub description: String,

    /// Input kind
    pub kind: InputKind,

    /// Value used when nothing is stored
    pub default: FieldValue,

    /// Allowed values for select inputs
    #[serde(default)]
    pub options: Vec<String>,

    /// Layout hint for the host's grid
    pub style_name: String,
}

impl FieldSpec {
    /// Declare a select field
    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        default: FieldValue,
        options: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: String::new(),
            kind: InputKind::Select,
            default,
            options: options.iter().map(|o| o.to_string()).collect(),
            style_name: FULL_WIDTH.to_string(),
        }
    }

    /// Set the help text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check whether a value is acceptable for this field
    ///
    /// Select fields only accept their declared options, compared on the
    /// displayed text so `0.5` and `"0.5"` are the same choice.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match self.kind {
            InputKind::Select => {
                let text = value.to_string();
                self.options.iter().any(|o| *o == text)
            }
            InputKind::Toggle => value.as_bool().is_some(),
            InputKind::Text => value.as_str().is_some(),
        }
    }
}

// ============================================================================
// FieldCatalog
// ============================================================================

/// The ordered set of fields every entry is configured with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCatalog {
    fields: Vec<FieldSpec>,
}

impl FieldCatalog {
    /// Create a catalog from field declarations
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The sitemap fields: priority and change frequency
    pub fn sitemap() -> Self {
        Self::new(vec![
            FieldSpec::select(
                "priority",
                "Priority",
                FieldValue::text("0.5"),
                &[
                    "0.1", "0.2", "0.3", "0.4", "0.5", "0.6", "0.7", "0.8", "0.9", "1.0",
                ],
            )
            .with_description("The priority of the pages relative to other pages on the site."),
            FieldSpec::select(
                "changefreq",
                "Change frequency",
                FieldValue::text("monthly"),
                &[
                    "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
                ],
            )
            .with_description("How frequently the pages are likely to change."),
        ])
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if a field is declared
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    /// Every field paired with its default value, in declaration order
    pub fn defaults(&self) -> Vec<(String, FieldValue)> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.default.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::sitemap()
    }
}

// ============================================================================
// Tests
// ============================================================================
