//! Commit gating
//!
//! Decides whether the submit affordance is enabled. A failed guard disables
//! the control; it never turns into an error after the fact.

use crate::projection::FormSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why the submit control is disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmitBlock {
    /// The modal is not open
    Closed,
    /// No content type or path has been chosen
    NoContentType,
    /// An identifier field is required but not chosen
    UidFieldUnchosen,
}

impl fmt::Display for SubmitBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitBlock::Closed => write!(f, "modal is closed"),
            SubmitBlock::NoContentType => write!(f, "no content type chosen"),
            SubmitBlock::UidFieldUnchosen => write!(f, "UID field not chosen"),
        }
    }
}

/// How the modal is being dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CloseTrigger {
    /// The footer cancel button
    CancelButton,
    /// A click outside the dialog
    Backdrop,
    /// The header close toggle
    Toggle,
    /// The host changed the location away from the modal
    Navigation,
}

/// First guard that blocks submitting, if any
pub fn submit_block(snapshot: &FormSnapshot) -> Option<SubmitBlock> {
    if !snapshot.phase.is_open() {
        return Some(SubmitBlock::Closed);
    }
    if snapshot.content_type.is_unselected() {
        return Some(SubmitBlock::NoContentType);
    }

    let uid_unchosen = snapshot.selected_uid_field.is_unselected();
    if snapshot.is_collection() && snapshot.phase.is_creating() && uid_unchosen {
        return Some(SubmitBlock::UidFieldUnchosen);
    }
    if !snapshot.uid_candidates.is_empty() && uid_unchosen {
        return Some(SubmitBlock::UidFieldUnchosen);
    }
    None
}

/// Whether the submit control is enabled
pub fn can_submit(snapshot: &FormSnapshot) -> bool {
    submit_block(snapshot).is_none()
}
