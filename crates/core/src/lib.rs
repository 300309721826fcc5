//! # Sitemap Core
//!
//! Core types, traits, and error handling for the sitemap modal form.
//!
//! This crate provides the foundational building blocks used throughout
//! the workspace, including:
//!
//! - **Types**: `Choice`, `SettingsType`, `FieldValue`, the path character class
//! - **Traits**: `Validatable` and `JsonDocument`
//! - **Errors**: Unified error handling with `SitemapError` and `SitemapResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{SitemapError, SitemapResult};
pub use traits::{JsonDocument, Validatable};
pub use types::{
    CHOOSE_CONTENT_TYPE_LABEL, CHOOSE_UID_FIELD_LABEL, Choice, FieldValue, InputKind,
    SettingsType, is_valid_path,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
