//! Identifier-field classification
//!
//! Decides which attributes of an entity may serve as its unique URL
//! identifier. The form treats the classifier as an injected collaborator.

use crate::entity::SelectableEntity;

/// Classifies the identifier-field candidates of an entity
pub trait UidClassifier {
    /// Candidate field names, in schema declaration order
    fn uid_fields(&self, entity: &SelectableEntity) -> Vec<String>;
}

/// Picks every attribute whose type is `uid`
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeTypeClassifier;

impl UidClassifier for AttributeTypeClassifier {
    fn uid_fields(&self, entity: &SelectableEntity) -> Vec<String> {
        entity
            .attributes()
            .filter(|(_, attr)| attr.is_uid())
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

impl<F> UidClassifier for F
where
    F: Fn(&SelectableEntity) -> Vec<String>,
{
    fn uid_fields(&self, entity: &SelectableEntity) -> Vec<String> {
        self(entity)
    }
}
