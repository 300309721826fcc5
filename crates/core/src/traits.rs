//! Core traits for the sitemap modal workspace
//!
//! This module defines the behaviors shared by the schema and form crates:
//! validation of host-supplied inputs and loading of JSON documents.

use crate::error::{SitemapError, SitemapResult};
use serde::{Serialize, de::DeserializeOwned};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use sitemap_core::{Validatable, SitemapResult, SitemapError};
///
/// struct Entry {
///     path: String,
/// }
///
/// impl Validatable for Entry {
///     fn validate(&self) -> SitemapResult<()> {
///         if !sitemap_core::is_valid_path(&self.path) {
///             return Err(SitemapError::invalid_path(&self.path));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `SitemapError` describing the problem.
    fn validate(&self) -> SitemapResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// JsonDocument Trait
// ============================================================================

/// Trait for host inputs exchanged as JSON documents
///
/// Loading validates the document when the type is also `Validatable`
/// through [`JsonDocument::load_validated`].
pub trait JsonDocument: Serialize + DeserializeOwned + Sized {
    /// Serialize to pretty JSON
    fn to_json(&self) -> SitemapResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from a JSON string
    fn from_json(json: &str) -> SitemapResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file
    fn load_from_file(path: &std::path::Path) -> SitemapResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| SitemapError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&json).map_err(|e| SitemapError::InvalidFormat {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read, parse and validate a JSON file
    fn load_validated(path: &std::path::Path) -> SitemapResult<Self>
    where
        Self: Validatable,
    {
        let doc = Self::load_from_file(path)?;
        doc.validate()?;
        Ok(doc)
    }
}

// ============================================================================
// Tests
// ============================================================================
