//! The record type stored and returned by every storage backend.
//!
//! A [`Record`] is an insertion-ordered mapping from field name to BSON value.
//! The store enforces no schema of its own; records are opaque to the storage
//! layer except for the model's designated key field.

use bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StorageResult;

/// A single stored record: an ordered mapping of field name to value.
///
/// Records are treated as opaque by the storage layer. The only field it ever
/// inspects is the key field named by the model's
/// [`KeyDescriptor`](crate::model::KeyDescriptor), and only for the key-based
/// operations (update/find/remove).
///
/// # Copy discipline
///
/// Backends never hand out references into their internal state. Every record
/// that crosses the storage boundary (in either direction) goes through
/// [`Record::shallow_copy`], so mutating a returned record can never affect
/// what the store holds, and vice versa.
///
/// # Example
///
/// ```ignore
/// use recstore::record::Record;
/// use bson::doc;
///
/// let mut user = Record::from(doc! { "email": "alice@example.com" });
/// user.set("firstName", "Alice");
/// assert_eq!(user.get("firstName"), Some(&"Alice".into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Document);

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self(Document::new())
    }

    /// Returns the value of a field, or `None` if the record has no such field.
    pub fn get(&self, field: &str) -> Option<&Bson> {
        self.0.get(field)
    }

    /// Sets a field to the given value, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Bson>) {
        self.0.insert(field, value);
    }

    /// Returns the number of fields in this record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the field names of this record, in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Copies this record by enumerating its top-level fields into a fresh record.
    ///
    /// The copy owns its values outright and is fully independent of the
    /// original. Nested values are carried over as-is; the copy never walks or
    /// normalizes them.
    pub fn shallow_copy(&self) -> Record {
        let mut copy = Document::new();

        for (field, value) in self.0.iter() {
            copy.insert(field.clone(), value.clone());
        }

        Record(copy)
    }

    /// Converts this record to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if a field value cannot be represented as JSON.
    pub fn to_json(&self) -> StorageResult<Value> {
        Ok(serde_json::to_value(&self.0)?)
    }

    /// Creates a record from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a JSON object.
    pub fn from_json(value: Value) -> StorageResult<Self> {
        Ok(Self(serde_json::from_value(value)?))
    }

    /// Returns a reference to the underlying BSON document.
    pub fn as_document(&self) -> &Document {
        &self.0
    }

    /// Consumes this record, returning the underlying BSON document.
    pub fn into_document(self) -> Document {
        self.0
    }
}

impl From<Document> for Record {
    fn from(doc: Document) -> Self {
        Self(doc)
    }
}

impl From<Record> for Document {
    fn from(record: Record) -> Self {
        record.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn shallow_copy_is_independent() {
        let original = Record::from(doc! { "email": "a@x.com", "firstName": "A" });
        let mut copy = original.shallow_copy();

        assert_eq!(copy, original);

        copy.set("firstName", "B");
        assert_eq!(original.get("firstName"), Some(&"A".into()));
        assert_eq!(copy.get("firstName"), Some(&"B".into()));
    }

    #[test]
    fn shallow_copy_preserves_field_order() {
        let record = Record::from(doc! { "c": 1, "a": 2, "b": 3 });
        let copy = record.shallow_copy();

        assert_eq!(copy.fields().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn json_conversion() {
        let record = Record::from(doc! { "email": "a@x.com", "age": 30 });
        let json = record.to_json().unwrap();

        assert_eq!(json["email"], "a@x.com");

        let back = Record::from_json(json).unwrap();
        assert_eq!(back.get("email"), Some(&"a@x.com".into()));
    }

    #[test]
    fn from_json_rejects_non_objects() {
        assert!(Record::from_json(Value::from(42)).is_err());
    }
}
