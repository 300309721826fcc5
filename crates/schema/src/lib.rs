//! # Sitemap Schema
//!
//! The host-side data the modal form reads: the selectable entities, the
//! identifier-field classifier, the statically declared sitemap fields and
//! the settings repository.
//!
//! ## Core Concepts
//!
//! - **SelectableEntity**: a structured content type with ordered attributes
//! - **UidClassifier**: picks identifier-field candidates from an entity
//! - **FieldCatalog**: the sitemap fields every entry is configured with
//! - **SettingsRepository**: host-owned values, keyed by settings type and target
//!

pub mod classifier;
pub mod entity;
pub mod field;
pub mod settings;

// Re-export commonly used types at crate root
pub use classifier::{AttributeTypeClassifier, UidClassifier};
pub use entity::{Attribute, EntityList, EntitySchema, SelectableEntity, UID_ATTRIBUTE_TYPE};
pub use field::{
    AREA_KEY, FULL_WIDTH, FieldCatalog, FieldSpec, INCLUDE_HOMEPAGE_KEY, UID_FIELD_KEY,
};
pub use settings::{SettingsDocument, SettingsRepository, TargetSettings};

// Re-export core types that are commonly used with the schema
pub use sitemap_core::{Choice, FieldValue, InputKind, SettingsType, SitemapError, SitemapResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
