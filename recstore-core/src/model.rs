//! The model seam between the storage layer and the application layer.
//!
//! Schema definition, validation, and key-field declaration live in the
//! application's model layer, not here. The storage layer sees models through
//! exactly one question: *which field, if any, identifies a record?* This
//! module defines that narrow interface.

use serde::{Deserialize, Serialize};

/// Names the field used as a record's unique identifier.
///
/// A key descriptor is resolved from the model once, when a backend is
/// constructed. All key-based equality comparisons in update/find/remove use
/// the field it names. Uniqueness of key values is not enforced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDescriptor {
    name: String,
}

impl KeyDescriptor {
    /// Creates a key descriptor for the given field name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name of the key field.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The narrow interface a storage backend needs from a model definition.
///
/// A model may or may not declare a key field. Backends query this once at
/// construction time; a model without a key yields a store that supports
/// `load`/`add`/`find_all` but fails key-based operations with
/// [`StorageError::NoKeyConfigured`](crate::error::StorageError::NoKeyConfigured).
pub trait Model: Send + Sync {
    /// Returns the key descriptor for this model, if one is configured.
    fn key_descriptor(&self) -> Option<KeyDescriptor>;
}

/// A plain in-code model definition.
///
/// Applications with a full model layer implement [`Model`] on their own
/// descriptor types; this struct covers callers that only need to name an
/// entity and optionally its key field.
///
/// # Example
///
/// ```ignore
/// use recstore::model::ModelDescriptor;
///
/// let users = ModelDescriptor::new("User").with_key("email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    name: String,
    key: Option<KeyDescriptor>,
}

impl ModelDescriptor {
    /// Creates a model descriptor with the given entity name and no key field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: None,
        }
    }

    /// Declares the key field for this model.
    pub fn with_key(mut self, field: impl Into<String>) -> Self {
        self.key = Some(KeyDescriptor::new(field));
        self
    }

    /// Returns the entity name of this model.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Model for ModelDescriptor {
    fn key_descriptor(&self) -> Option<KeyDescriptor> {
        self.key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_without_key() {
        let model = ModelDescriptor::new("User");
        assert_eq!(model.name(), "User");
        assert!(model.key_descriptor().is_none());
    }

    #[test]
    fn descriptor_with_key() {
        let model = ModelDescriptor::new("User").with_key("email");
        let key = model.key_descriptor().unwrap();
        assert_eq!(key.name(), "email");
    }
}
