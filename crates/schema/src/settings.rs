//! Host-owned sitemap settings
//!
//! The form never writes settings itself. It reads them back through
//! [`SettingsRepository`] to project field values, and the host applies the
//! changes the form reports. [`SettingsDocument`] is the in-memory
//! repository used by the CLI and by tests.

use crate::field::FieldCatalog;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sitemap_core::{FieldValue, JsonDocument, SettingsType, SitemapResult, Validatable};
use tracing::debug;

/// Field values configured for one entity or custom path
pub type TargetSettings = IndexMap<String, FieldValue>;

// ============================================================================
// SettingsRepository Trait
// ============================================================================

/// Read/write access to the settings mapping
pub trait SettingsRepository {
    /// Stored value of `field` for `target`, if any
    fn get(&self, settings_type: SettingsType, target: &str, field: &str) -> Option<&FieldValue>;

    /// Store a single value
    fn set(&mut self, settings_type: SettingsType, target: &str, field: &str, value: FieldValue);

    /// Drop every value stored for `target`
    fn clear(&mut self, settings_type: SettingsType, target: &str);

    /// Everything stored for `target`, if anything is
    fn target_settings(&self, settings_type: SettingsType, target: &str) -> Option<&TargetSettings>;

    /// Replace everything stored for `target` with `values`
    fn replace_target(&mut self, settings_type: SettingsType, target: &str, values: TargetSettings);

    /// Replace everything stored for `target` with the catalog defaults
    ///
    /// Implementations must apply this as a single step: readers observe
    /// either the previous values or the complete set of defaults.
    fn reset_to_defaults(
        &mut self,
        settings_type: SettingsType,
        target: &str,
        catalog: &FieldCatalog,
    ) {
        let values: TargetSettings = catalog.defaults().into_iter().collect();
        debug!(%settings_type, key = target, fields = values.len(), "Resetting target to defaults");
        self.replace_target(settings_type, target, values);
    }

    /// Value of a setting that is not tied to a target
    fn global(&self, key: &str) -> Option<&FieldValue>;

    /// Store a setting that is not tied to a target
    fn set_global(&mut self, key: &str, value: FieldValue);

    /// Check whether anything is stored for `target`
    fn contains_target(&self, settings_type: SettingsType, target: &str) -> bool;
}

// ============================================================================
// SettingsDocument
// ============================================================================

/// In-memory settings mapping, shaped like the host's settings object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
    /// Settings per structured entity
    #[serde(default)]
    pub modified_content_types: IndexMap<String, TargetSettings>,

    /// Settings per custom path
    #[serde(default)]
    pub modified_custom_entries: IndexMap<String, TargetSettings>,

    /// Settings not tied to a target
    #[serde(default, rename = "settings")]
    pub global: IndexMap<String, FieldValue>,
}

impl SettingsDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// The mapping used for a settings type
    pub fn mapping(&self, settings_type: SettingsType) -> &IndexMap<String, TargetSettings> {
        match settings_type {
            SettingsType::Collection => &self.modified_content_types,
            SettingsType::Custom => &self.modified_custom_entries,
        }
    }

    fn mapping_mut(
        &mut self,
        settings_type: SettingsType,
    ) -> &mut IndexMap<String, TargetSettings> {
        match settings_type {
            SettingsType::Collection => &mut self.modified_content_types,
            SettingsType::Custom => &mut self.modified_custom_entries,
        }
    }

    /// Configured targets for a settings type, in insertion order
    pub fn targets(&self, settings_type: SettingsType) -> impl Iterator<Item = &str> {
        self.mapping(settings_type).keys().map(String::as_str)
    }
}

impl SettingsRepository for SettingsDocument {
    fn get(&self, settings_type: SettingsType, target: &str, field: &str) -> Option<&FieldValue> {
        self.mapping(settings_type)
            .get(target)
            .and_then(|values| values.get(field))
    }

    fn set(&mut self, settings_type: SettingsType, target: &str, field: &str, value: FieldValue) {
        debug!(%settings_type, key = target, field, %value, "Setting value");
        self.mapping_mut(settings_type)
            .entry(target.to_string())
            .or_default()
            .insert(field.to_string(), value);
    }

    fn clear(&mut self, settings_type: SettingsType, target: &str) {
        debug!(%settings_type, key = target, "Clearing target settings");
        self.mapping_mut(settings_type).shift_remove(target);
    }

    fn target_settings(
        &self,
        settings_type: SettingsType,
        target: &str,
    ) -> Option<&TargetSettings> {
        self.mapping(settings_type).get(target)
    }

    fn replace_target(
        &mut self,
        settings_type: SettingsType,
        target: &str,
        values: TargetSettings,
    ) {
        self.mapping_mut(settings_type).insert(target.to_string(), values);
    }

    fn global(&self, key: &str) -> Option<&FieldValue> {
        self.global.get(key)
    }

    fn set_global(&mut self, key: &str, value: FieldValue) {
        self.global.insert(key.to_string(), value);
    }

    fn contains_target(&self, settings_type: SettingsType, target: &str) -> bool {
        self.mapping(settings_type).contains_key(target)
    }
}

impl Validatable for SettingsDocument {
    fn validate(&self) -> SitemapResult<()> {
        for path in self.modified_custom_entries.keys() {
            if !sitemap_core::is_valid_path(path) {
                return Err(sitemap_core::SitemapError::invalid_path(path));
            }
        }
        Ok(())
    }
}

impl JsonDocument for SettingsDocument {}

// ============================================================================
// Tests
// ============================================================================
