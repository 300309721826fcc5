//! # Sitemap Form
//!
//! State machine of the modal used to add or edit a sitemap entry.
//!
//! The modal lets an operator pick a content entity (Collection mode) or
//! type a custom path, choose the entity's identifier field, and fill in the
//! sitemap fields. The host owns the settings and the navigation; the form
//! owns only transient edit state and reports every change back.
//!
//! ## Flow
//!
//! ```text
//! Closed ── search/edit token ──> Open(Creating | Editing)
//!   ^                                   │
//!   └──── Committing | Cancelling <─────┘
//! ```
//!
//! - **mode**: open/closed, create/edit and the authoritative content type
//! - **uid**: identifier-field candidates and auto-selection
//! - **projection**: field values with default fallback, enablement
//! - **gate**: the submit guard
//! - **controller**: [`ModalForm`], which ties them to host callbacks
//!

pub mod controller;
pub mod gate;
pub mod host;
pub mod mode;
pub mod navigation;
pub mod projection;
pub mod uid;
pub mod view;

pub use controller::{FormState, InputOutcome, ModalForm, Transition};
pub use gate::{CloseTrigger, SubmitBlock, can_submit, submit_block};
pub use host::{DefaultsReset, FieldChange, FormHost, SettingsHost, Submission};
pub use mode::{ModalPhase, ResolvedMode};
pub use navigation::Location;
pub use projection::{FieldView, FormSnapshot};
pub use uid::UidCandidates;
pub use view::{AreaInput, ContentTypeInput, ContentTypeOption, ModalView, UidFieldInput};

// Re-export the types callers need to drive the form
pub use sitemap_core::{Choice, FieldValue, SettingsType};
pub use sitemap_schema::{EntityList, FieldCatalog, SelectableEntity, SettingsDocument};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
