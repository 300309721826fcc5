//! Identifier-field derivation
//!
//! Computes the UID candidates of the chosen entity and decides whether the
//! operator has to pick one explicitly.

use serde::Serialize;
use sitemap_core::Choice;
use sitemap_schema::{EntityList, UidClassifier};
use tracing::debug;

/// Ordered identifier-field candidates of one entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UidCandidates {
    fields: Vec<String>,
}

impl UidCandidates {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Candidates of `api_id`, or none when the entity is unknown
    pub fn derive(api_id: &str, entities: &EntityList, classifier: &impl UidClassifier) -> Self {
        let fields = entities
            .find(api_id)
            .map(|entity| classifier.uid_fields(entity))
            .unwrap_or_default();
        debug!(entity = api_id, candidates = ?fields, "Derived UID candidates");
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    /// More than one candidate: the operator must choose
    pub fn needs_choice(&self) -> bool {
        self.fields.len() > 1
    }

    /// The selection made without operator input
    ///
    /// A single candidate is picked automatically; otherwise nothing is.
    pub fn auto_selection(&self) -> Choice<String> {
        match self.fields.as_slice() {
            [only] => Choice::Selected(only.clone()),
            _ => Choice::Unselected,
        }
    }

    /// Options offered by the UID select
    ///
    /// Starts with a single `Unselected` entry when a choice is required.
    pub fn options(&self) -> Vec<Choice<String>> {
        let mut options = Vec::with_capacity(self.fields.len() + 1);
        if self.needs_choice() {
            options.push(Choice::Unselected);
        }
        options.extend(self.fields.iter().cloned().map(Choice::Selected));
        options
    }
}
