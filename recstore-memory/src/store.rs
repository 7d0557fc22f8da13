//! In-memory storage implementation for record stores.
//!
//! This module provides a simple in-memory backend that keeps records in an
//! insertion-ordered vector behind an async-safe read-write lock.

use std::sync::Arc;

use async_trait::async_trait;
use bson::Bson;
use mea::rwlock::RwLock;

use recstore_core::{
    backend::{RecordBackend, RecordBackendBuilder},
    error::{StorageError, StorageResult},
    model::{KeyDescriptor, Model},
    record::Record,
};

/// Thread-safe in-memory record storage backend.
///
/// This struct implements the [`RecordBackend`] trait with a plain vector of
/// records guarded by an async-aware read-write lock. Records keep their
/// insertion order, and key lookups are a linear scan from the front, so with
/// duplicate key values the first match in insertion order always wins.
///
/// # Key configuration
///
/// A store captures its model's key descriptor once, at construction. A model
/// without a key field yields a store that supports `load`/`add`/`find_all`
/// but fails `update`/`find`/`remove` with
/// [`StorageError::NoKeyConfigured`].
///
/// # Thread Safety
///
/// `MemoryStore` is cloneable and uses an `Arc`-wrapped record sequence, so
/// clones share the same underlying data. Each operation holds the lock for
/// its full duration, which keeps every operation atomic with respect to the
/// sequence.
///
/// # Performance
///
/// Every key lookup scans the whole sequence (no indexing). Upgrading to a
/// hash index would change which record wins under duplicate keys, so the
/// linear scan is part of the contract, not an implementation detail.
///
/// # Example
///
/// ```ignore
/// use recstore_memory::MemoryStore;
/// use recstore::{backend::RecordBackend, model::ModelDescriptor};
/// use bson::doc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let model = ModelDescriptor::new("User").with_key("email");
///     let store = MemoryStore::new(&model);
///
///     store.add(doc! { "email": "alice@example.com" }.into()).await?;
///
///     let alice = store.find(&"alice@example.com".into()).await?;
///     assert!(alice.is_some());
///
///     Ok(())
/// }
/// ```
#[derive(Default, Clone, Debug)]
pub struct MemoryStore {
    /// The record sequence, in insertion order.
    records: Arc<RwLock<Vec<Record>>>,
    /// Key descriptor resolved from the model at construction, if any.
    key: Option<KeyDescriptor>,
}

impl MemoryStore {
    /// Creates an empty in-memory store bound to the given model.
    ///
    /// The model's key descriptor is resolved here, once; later changes to the
    /// model are not observed.
    pub fn new(model: &dyn Model) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            key: model.key_descriptor(),
        }
    }

    /// Creates a builder for constructing a `MemoryStore`.
    pub fn builder() -> MemoryStoreBuilder {
        MemoryStoreBuilder::default()
    }

    /// Returns the name of the configured key field, if any.
    pub fn key_field(&self) -> Option<&str> {
        self.key.as_ref().map(KeyDescriptor::name)
    }

    fn key_name(&self) -> StorageResult<&str> {
        self.key
            .as_ref()
            .map(KeyDescriptor::name)
            .ok_or(StorageError::NoKeyConfigured)
    }
}

#[async_trait]
impl RecordBackend for MemoryStore {
    async fn load(&self, records: Vec<Record>) -> StorageResult<()> {
        let mut store = self.records.write().await;

        for record in &records {
            store.push(record.shallow_copy());
        }

        Ok(())
    }

    async fn add(&self, record: Record) -> StorageResult<usize> {
        let mut store = self.records.write().await;
        store.push(record.shallow_copy());

        Ok(store.len())
    }

    async fn update(&self, record: Record) -> StorageResult<()> {
        let key_name = self.key_name()?;
        let key = record.get(key_name);

        let mut store = self.records.write().await;

        match store.iter().position(|r| r.get(key_name) == key) {
            Some(ix) => store[ix] = record.shallow_copy(),
            None => store.push(record.shallow_copy()),
        }

        Ok(())
    }

    async fn find(&self, key: &Bson) -> StorageResult<Option<Record>> {
        let key_name = self.key_name()?;
        let store = self.records.read().await;

        Ok(store
            .iter()
            .find(|r| r.get(key_name) == Some(key))
            .map(Record::shallow_copy))
    }

    async fn find_all(&self) -> StorageResult<Vec<Record>> {
        let store = self.records.read().await;

        Ok(store.iter().map(Record::shallow_copy).collect())
    }

    async fn remove(&self, key: &Bson) -> StorageResult<Option<Record>> {
        let key_name = self.key_name()?;
        let mut store = self.records.write().await;

        let ix = store.iter().position(|r| r.get(key_name) == Some(key));

        // Vec::remove shifts later records down, preserving their order. The
        // excised record is returned as-is; the store no longer owns it.
        Ok(ix.map(|ix| store.remove(ix)))
    }
}

/// Builder for constructing [`MemoryStore`] instances.
///
/// The key descriptor can be resolved from a model or named directly; when
/// neither is given the store comes up without key support.
///
/// # Example
///
/// ```ignore
/// use recstore_memory::MemoryStore;
/// use recstore::backend::RecordBackendBuilder;
///
/// #[tokio::main]
/// async fn main() {
///     let store = MemoryStore::builder()
///         .key_field("email")
///         .build()
///         .await
///         .unwrap();
/// }
/// ```
#[derive(Default)]
pub struct MemoryStoreBuilder {
    key: Option<KeyDescriptor>,
}

impl MemoryStoreBuilder {
    /// Resolves the key descriptor from the given model.
    pub fn model(mut self, model: &dyn Model) -> Self {
        self.key = model.key_descriptor();
        self
    }

    /// Names the key field directly, without going through a model.
    pub fn key_field(mut self, name: impl Into<String>) -> Self {
        self.key = Some(KeyDescriptor::new(name));
        self
    }
}

#[async_trait]
impl RecordBackendBuilder for MemoryStoreBuilder {
    type Backend = MemoryStore;

    /// Builds and returns a new [`MemoryStore`] instance.
    ///
    /// This always succeeds and returns a freshly initialized store.
    async fn build(self) -> StorageResult<Self::Backend> {
        Ok(MemoryStore {
            records: Arc::new(RwLock::new(Vec::new())),
            key: self.key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use recstore_core::model::ModelDescriptor;

    fn user_model() -> ModelDescriptor {
        ModelDescriptor::new("User").with_key("email")
    }

    fn sample_records() -> Vec<Record> {
        vec![
            doc! { "email": "a@x.com", "firstName": "A" }.into(),
            doc! { "email": "b@x.com", "firstName": "B" }.into(),
        ]
    }

    #[tokio::test]
    async fn load_preserves_contents_and_order() {
        let model = user_model();
        let store = MemoryStore::new(&model);

        let records = sample_records();
        store.load(records.clone()).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all, records);
    }

    #[tokio::test]
    async fn load_empty_is_a_noop() {
        let model = user_model();
        let store = MemoryStore::new(&model);

        store.load(Vec::new()).await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_returns_running_count() {
        let model = user_model();
        let store = MemoryStore::new(&model);

        let count = store
            .add(doc! { "email": "a@x.com" }.into())
            .await
            .unwrap();
        assert_eq!(count, 1);

        let count = store
            .add(doc! { "email": "b@x.com" }.into())
            .await
            .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn update_replaces_in_place() {
        let model = user_model();
        let store = MemoryStore::new(&model);
        store.load(sample_records()).await.unwrap();

        store
            .update(doc! { "email": "a@x.com", "firstName": "A2" }.into())
            .await
            .unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        // The updated record kept its position.
        assert_eq!(all[0].get("firstName"), Some(&"A2".into()));
        assert_eq!(all[1].get("email"), Some(&"b@x.com".into()));
    }

    #[tokio::test]
    async fn update_appends_on_unseen_key() {
        let model = user_model();
        let store = MemoryStore::new(&model);
        store.load(sample_records()).await.unwrap();

        store
            .update(doc! { "email": "c@x.com", "firstName": "C" }.into())
            .await
            .unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].get("email"), Some(&"c@x.com".into()));
    }

    #[tokio::test]
    async fn update_is_idempotent() {
        let model = user_model();
        let store = MemoryStore::new(&model);

        let record: Record = doc! { "email": "a@x.com", "firstName": "A" }.into();
        store.update(record.clone()).await.unwrap();
        store.update(record.clone()).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all, vec![record]);
    }

    #[tokio::test]
    async fn find_returns_first_match() {
        let model = user_model();
        let store = MemoryStore::new(&model);
        store.load(sample_records()).await.unwrap();

        let found = store
            .find(&"a@x.com".into())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get("firstName"), Some(&"A".into()));
    }

    #[tokio::test]
    async fn find_miss_is_none_not_error() {
        let model = user_model();
        let store = MemoryStore::new(&model);
        store.load(sample_records()).await.unwrap();

        let found = store.find(&"missing@x.com".into()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn duplicate_keys_resolve_to_first_match() {
        let model = user_model();
        let store = MemoryStore::new(&model);

        store
            .add(doc! { "email": "a@x.com", "firstName": "first" }.into())
            .await
            .unwrap();
        store
            .add(doc! { "email": "a@x.com", "firstName": "second" }.into())
            .await
            .unwrap();

        let found = store
            .find(&"a@x.com".into())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get("firstName"), Some(&"first".into()));

        // Removing also touches only the first duplicate.
        let removed = store
            .remove(&"a@x.com".into())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(removed.get("firstName"), Some(&"first".into()));

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].get("firstName"), Some(&"second".into()));
    }

    #[tokio::test]
    async fn remove_excises_exactly_one() {
        let model = user_model();
        let store = MemoryStore::new(&model);
        store.load(sample_records()).await.unwrap();

        let removed = store
            .remove(&"a@x.com".into())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(removed.get("firstName"), Some(&"A".into()));

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].get("email"), Some(&"b@x.com".into()));
    }

    #[tokio::test]
    async fn remove_miss_leaves_store_unchanged() {
        let model = user_model();
        let store = MemoryStore::new(&model);
        store.load(sample_records()).await.unwrap();

        let removed = store.remove(&"missing@x.com".into()).await.unwrap();
        assert!(removed.is_none());
        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn returned_records_are_isolated_copies() {
        let model = user_model();
        let store = MemoryStore::new(&model);
        store.load(sample_records()).await.unwrap();

        let mut found = store
            .find(&"a@x.com".into())
            .await
            .unwrap()
            .unwrap();
        found.set("firstName", "mutated");

        let mut all = store.find_all().await.unwrap();
        assert_eq!(all[0].get("firstName"), Some(&"A".into()));

        all[0].set("firstName", "mutated again");
        let found = store
            .find(&"a@x.com".into())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get("firstName"), Some(&"A".into()));
    }

    #[tokio::test]
    async fn keyless_store_rejects_key_operations() {
        let model = ModelDescriptor::new("User");
        let store = MemoryStore::new(&model);
        store.load(sample_records()).await.unwrap();

        assert!(matches!(
            store
                .update(doc! { "email": "a@x.com" }.into())
                .await,
            Err(StorageError::NoKeyConfigured)
        ));
        assert!(matches!(
            store.find(&"a@x.com".into()).await,
            Err(StorageError::NoKeyConfigured)
        ));
        assert!(matches!(
            store.remove(&"a@x.com".into()).await,
            Err(StorageError::NoKeyConfigured)
        ));

        // The failed operations mutated nothing.
        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn keyless_store_still_loads_and_lists() {
        let store = MemoryStore::builder().build().await.unwrap();

        let count = store
            .add(doc! { "email": "a@x.com" }.into())
            .await
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_matches_records_missing_the_key_field() {
        let model = user_model();
        let store = MemoryStore::new(&model);

        store
            .add(doc! { "firstName": "anonymous" }.into())
            .await
            .unwrap();

        // An input without the key field matches the first stored record
        // that also lacks it, rather than appending a duplicate.
        store
            .update(doc! { "firstName": "still anonymous" }.into())
            .await
            .unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].get("firstName"), Some(&"still anonymous".into()));
    }

    #[tokio::test]
    async fn clones_share_the_record_sequence() {
        let model = user_model();
        let store = MemoryStore::new(&model);
        let clone = store.clone();

        store
            .add(doc! { "email": "a@x.com" }.into())
            .await
            .unwrap();

        assert_eq!(clone.find_all().await.unwrap().len(), 1);
    }
}
