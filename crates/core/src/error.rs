//! Error types for the sitemap modal workspace
//!
//! The form controller itself never fails: invalid interactions are reported
//! as disabled or discarded outcomes. These errors cover the fallible edges
//! around it, such as loading entity lists, settings and interaction scripts.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the sitemap modal workspace
#[derive(Debug, Error)]
pub enum SitemapError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A free-form path contains characters outside the allowed class
    #[error("Invalid path '{path}': only A-Z, a-z, 0-9, '-', '_', '.', '~' and '/' are allowed")]
    InvalidPath { path: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Entity not found in the selectable list
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    // ========================================================================
    // Duplicate Errors
    // ========================================================================
    /// Two selectable entities share the same api id
    #[error("Duplicate entity api id: '{0}' already exists")]
    DuplicateEntity(String),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Input file has an unexpected shape
    #[error("Invalid input format in '{path}': {message}")]
    InvalidFormat { path: PathBuf, message: String },
}

impl SitemapError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        SitemapError::Validation(msg.into())
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        SitemapError::InvalidPath { path: path.into() }
    }

    /// Create an entity not found error
    pub fn entity_not_found(api_id: impl Into<String>) -> Self {
        SitemapError::EntityNotFound(api_id.into())
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SitemapError::Validation(_) | SitemapError::InvalidPath { .. }
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, SitemapError::EntityNotFound(_))
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, SitemapError::Io(_) | SitemapError::FileRead { .. })
    }
}

/// Result type alias using SitemapError
pub type SitemapResult<T> = Result<T, SitemapError>;

// ============================================================================
// Tests
// ============================================================================
