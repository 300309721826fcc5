//! Core data types for the sitemap modal form
//!
//! This module defines the fundamental types shared by the schema and form
//! crates: the tagged selection type that replaces sentinel strings, the
//! settings-type discriminator, field values and the path character class.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

// ============================================================================
// Placeholder labels
// ============================================================================

/// Label rendered for an unselected content type
pub const CHOOSE_CONTENT_TYPE_LABEL: &str = "- Choose Content Type -";

/// Label rendered for an unselected identifier field
pub const CHOOSE_UID_FIELD_LABEL: &str = "- Choose UID field -";

// ============================================================================
// Choice
// ============================================================================

/// An explicit "not chosen yet" or "chosen" value
///
/// Serializes as `null` when unselected and as the inner value otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Choice<T> {
    /// Nothing has been chosen
    #[default]
    Unselected,
    /// A concrete value has been chosen
    Selected(T),
}

impl<T> Choice<T> {
    /// Check if a value has been chosen
    pub fn is_selected(&self) -> bool {
        matches!(self, Choice::Selected(_))
    }

    /// Check if nothing has been chosen
    pub fn is_unselected(&self) -> bool {
        matches!(self, Choice::Unselected)
    }

    /// Get the chosen value, if any
    pub fn selected(&self) -> Option<&T> {
        match self {
            Choice::Selected(v) => Some(v),
            Choice::Unselected => None,
        }
    }

    /// Convert into an `Option`
    pub fn into_option(self) -> Option<T> {
        match self {
            Choice::Selected(v) => Some(v),
            Choice::Unselected => None,
        }
    }

    /// Borrow the inner value
    pub fn as_ref(&self) -> Choice<&T> {
        match self {
            Choice::Selected(v) => Choice::Selected(v),
            Choice::Unselected => Choice::Unselected,
        }
    }

    /// Map the chosen value
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Choice<U> {
        match self {
            Choice::Selected(v) => Choice::Selected(f(v)),
            Choice::Unselected => Choice::Unselected,
        }
    }

    /// Return this choice if selected, otherwise evaluate the fallback
    pub fn or_else(self, f: impl FnOnce() -> Choice<T>) -> Choice<T> {
        match self {
            Choice::Selected(_) => self,
            Choice::Unselected => f(),
        }
    }
}

impl Choice<String> {
    /// Build a choice from free text, treating the empty string as unselected
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Choice::Unselected
        } else {
            Choice::Selected(text)
        }
    }

    /// Borrow the chosen string, if any
    pub fn as_deref(&self) -> Option<&str> {
        self.selected().map(String::as_str)
    }

    /// The chosen string, or the empty string when unselected
    pub fn as_str(&self) -> &str {
        self.as_deref().unwrap_or("")
    }

    /// Text to display, substituting `placeholder` when unselected
    pub fn label<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.as_deref().unwrap_or(placeholder)
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Choice::Selected(v),
            None => Choice::Unselected,
        }
    }
}

// ============================================================================
// SettingsType
// ============================================================================

/// Which settings mapping and flow the form works against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SettingsType {
    /// Structured entities chosen from a list
    #[default]
    Collection,
    /// Free-form URL paths
    Custom,
}

impl SettingsType {
    /// Check if this is the Collection flow
    pub fn is_collection(&self) -> bool {
        matches!(self, SettingsType::Collection)
    }

    /// Localization key of the create-mode description
    pub fn description_key(&self) -> &'static str {
        match self {
            SettingsType::Collection => "sitemap.Modal.CollectionDescription",
            SettingsType::Custom => "sitemap.Modal.CustomDescription",
        }
    }
}

impl fmt::Display for SettingsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsType::Collection => write!(f, "Collection"),
            SettingsType::Custom => write!(f, "Custom"),
        }
    }
}

// ============================================================================
// FieldValue
// ============================================================================

/// A single setting value as stored by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl FieldValue {
    /// Create a string value
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::String(value.into())
    }

    /// Try to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Check if the value carries no usable content (null or empty string)
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::String(v) => v.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::String(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

// ============================================================================
// Input kinds
// ============================================================================

/// How a catalog field is presented to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Single choice from a fixed option list
    Select,
    /// Free text
    Text,
    /// On/off switch
    Toggle,
}

// ============================================================================
// Path character class
// ============================================================================

static PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9\-_.~/]*$").expect("path pattern is a valid regex")
});

/// Check that a free-form path only uses `[A-Za-z0-9-_.~/]`
///
/// The empty string is a valid path.
pub fn is_valid_path(s: &str) -> bool {
    PATH_PATTERN.is_match(s)
}

// ============================================================================
// Tests
// ============================================================================
