//! Selectable entity descriptors
//!
//! The host hands the form a list of structured content types. The form only
//! reads them: to list choices, and to derive identifier-field candidates.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sitemap_core::{JsonDocument, SitemapError, SitemapResult, Validatable};
use std::collections::HashSet;

/// Attribute type that marks an identifier (UID) field
pub const UID_ATTRIBUTE_TYPE: &str = "uid";

// ============================================================================
// Attribute
// ============================================================================

/// A single attribute of an entity schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Attribute type name (e.g. "string", "uid", "richtext")
    #[serde(rename = "type")]
    pub kind: String,

    /// Source attribute of a generated UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_field: Option<String>,
}

impl Attribute {
    /// Create an attribute of the given type
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            target_field: None,
        }
    }

    /// Create a UID attribute
    pub fn uid() -> Self {
        Self::new(UID_ATTRIBUTE_TYPE)
    }

    /// Set the target field
    pub fn with_target_field(mut self, field: impl Into<String>) -> Self {
        self.target_field = Some(field.into());
        self
    }

    /// Check if this attribute is a UID
    pub fn is_uid(&self) -> bool {
        self.kind == UID_ATTRIBUTE_TYPE
    }
}

/// Attribute map of an entity, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySchema {
    #[serde(default)]
    pub attributes: IndexMap<String, Attribute>,
}

// ============================================================================
// SelectableEntity
// ============================================================================

/// A structured content type the operator can configure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectableEntity {
    /// Stable identifier
    #[serde(rename = "apiID")]
    pub api_id: String,

    /// Human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Field names and types
    #[serde(default)]
    pub schema: EntitySchema,
}

impl SelectableEntity {
    /// Create an entity with no attributes
    pub fn new(api_id: impl Into<String>) -> Self {
        Self {
            api_id: api_id.into(),
            display_name: None,
            schema: EntitySchema::default(),
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set the display name
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Append an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.schema.attributes.insert(name.into(), attribute);
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Label shown in the content-type select
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.api_id)
    }

    /// Iterate attributes in declaration order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Attribute)> {
        self.schema
            .attributes
            .iter()
            .map(|(name, attr)| (name.as_str(), attr))
    }
}

impl Validatable for SelectableEntity {
    fn validate(&self) -> SitemapResult<()> {
        if self.api_id.trim().is_empty() {
            return Err(SitemapError::validation("Entity api id cannot be empty"));
        }
        Ok(())
    }
}

// ============================================================================
// EntityList
// ============================================================================

/// The full list of selectable entities supplied by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityList {
    entities: Vec<SelectableEntity>,
}

impl EntityList {
    /// Create a list from entities
    pub fn new(entities: Vec<SelectableEntity>) -> Self {
        Self { entities }
    }

    /// Find an entity by api id
    pub fn find(&self, api_id: &str) -> Option<&SelectableEntity> {
        self.entities.iter().find(|e| e.api_id == api_id)
    }

    /// Iterate entities in host order
    pub fn iter(&self) -> impl Iterator<Item = &SelectableEntity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromIterator<SelectableEntity> for EntityList {
    fn from_iter<I: IntoIterator<Item = SelectableEntity>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Validatable for EntityList {
    fn validate(&self) -> SitemapResult<()> {
        let mut seen = HashSet::new();
        for entity in &self.entities {
            entity.validate()?;
            if !seen.insert(entity.api_id.as_str()) {
                return Err(SitemapError::DuplicateEntity(entity.api_id.clone()));
            }
        }
        Ok(())
    }
}

impl JsonDocument for EntityList {}

// ============================================================================
// Tests
// ============================================================================
