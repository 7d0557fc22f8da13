//! Main record store interface for interacting with storage backends.
//!
//! This module provides the primary API for working with record stores. It exposes three store types:
//!
//! - [`RecordStore`] - Typed store for working with a specific backend implementation
//! - [`DynRecordStore`] - Dynamic dispatch store for runtime backend selection
//! - [`DynRecordStoreRef`] - Reference-based store for temporary use
//!
//! Additionally, it provides conversion traits for flexible store type handling.
//!
//! # Example
//!
//! ```ignore
//! use recstore::store::RecordStore;
//! use bson::doc;
//!
//! let store = RecordStore::new(backend);
//! store.add(doc! { "email": "alice@example.com" }.into()).await?;
//! ```

use bson::Bson;

use crate::{
    backend::{DynRecordBackend, RecordBackend},
    error::StorageResult,
    record::Record,
};

/// A record store bound to a specific backend implementation.
///
/// This struct provides access to a record store with compile-time knowledge of the
/// backend type, enabling full backend optimization. Every operation delegates to
/// the backend; the store adds no behavior of its own beyond key-value conversion
/// conveniences.
///
/// # Type Parameters
///
/// * `B` - The backend implementation type
///
/// # Example
///
/// ```ignore
/// let store = RecordStore::new(my_backend);
/// let everyone = store.find_all().await?;
/// ```
#[derive(Debug)]
pub struct RecordStore<B: RecordBackend> {
    backend: B,
}

impl<B: RecordBackend> RecordStore<B> {
    /// Creates a new record store with the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Bulk-loads records into the store, appending them in order.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself fails; loading performs no validation.
    pub async fn load(&self, records: Vec<Record>) -> StorageResult<()> {
        self.backend.load(records).await
    }

    /// Appends a single record, returning the new total record count.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself fails.
    pub async fn add(&self, record: Record) -> StorageResult<usize> {
        self.backend.add(record).await
    }

    /// Updates the record matching the input's key-field value, or appends it (upsert).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoKeyConfigured`](crate::error::StorageError::NoKeyConfigured)
    /// if the backend's model declares no key field.
    pub async fn update(&self, record: Record) -> StorageResult<()> {
        self.backend.update(record).await
    }

    /// Finds the first record whose key-field value equals `key`.
    ///
    /// # Returns
    ///
    /// A copy of the first match, or `None` if no record matches.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoKeyConfigured`](crate::error::StorageError::NoKeyConfigured)
    /// if the backend's model declares no key field.
    pub async fn find(&self, key: impl Into<Bson> + Send) -> StorageResult<Option<Record>> {
        self.backend.find(&key.into()).await
    }

    /// Returns every record in the store, in insertion order.
    pub async fn find_all(&self) -> StorageResult<Vec<Record>> {
        self.backend.find_all().await
    }

    /// Removes the first record whose key-field value equals `key`.
    ///
    /// # Returns
    ///
    /// The removed record, or `None` if no record matched.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoKeyConfigured`](crate::error::StorageError::NoKeyConfigured)
    /// if the backend's model declares no key field.
    pub async fn remove(&self, key: impl Into<Bson> + Send) -> StorageResult<Option<Record>> {
        self.backend.remove(&key.into()).await
    }

    /// Shuts down the store and releases backend resources.
    ///
    /// This consumes the store and should be called when no longer needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the shutdown operation fails.
    pub async fn shutdown(self) -> StorageResult<()> {
        self.backend.shutdown().await?;

        Ok(())
    }
}

#[derive(Debug)]
pub struct DynRecordStore {
    backend: Box<dyn DynRecordBackend>,
}

impl DynRecordStore {
    /// Creates a new dynamic record store with the given backend trait object.
    pub fn new(backend: Box<dyn DynRecordBackend>) -> Self {
        Self { backend }
    }

    /// Bulk-loads records into the store, appending them in order.
    pub async fn load(&self, records: Vec<Record>) -> StorageResult<()> {
        self.backend.load(records).await
    }

    /// Appends a single record, returning the new total record count.
    pub async fn add(&self, record: Record) -> StorageResult<usize> {
        self.backend.add(record).await
    }

    /// Updates the record matching the input's key-field value, or appends it (upsert).
    pub async fn update(&self, record: Record) -> StorageResult<()> {
        self.backend.update(record).await
    }

    /// Finds the first record whose key-field value equals `key`.
    pub async fn find(&self, key: impl Into<Bson> + Send) -> StorageResult<Option<Record>> {
        self.backend.find(&key.into()).await
    }

    /// Returns every record in the store, in insertion order.
    pub async fn find_all(&self) -> StorageResult<Vec<Record>> {
        self.backend.find_all().await
    }

    /// Removes the first record whose key-field value equals `key`.
    pub async fn remove(&self, key: impl Into<Bson> + Send) -> StorageResult<Option<Record>> {
        self.backend.remove(&key.into()).await
    }

    /// Shuts down the store and releases backend resources.
    pub async fn shutdown(self) -> StorageResult<()> {
        self.backend.shutdown_boxed().await
    }
}

#[derive(Debug)]
pub struct DynRecordStoreRef<'a> {
    backend: &'a dyn DynRecordBackend,
}

impl<'a> DynRecordStoreRef<'a> {
    /// Creates a reference to a dynamic record store.
    pub fn new(backend: &'a dyn DynRecordBackend) -> Self {
        Self { backend }
    }

    /// Bulk-loads records into the store, appending them in order.
    pub async fn load(&self, records: Vec<Record>) -> StorageResult<()> {
        self.backend.load(records).await
    }

    /// Appends a single record, returning the new total record count.
    pub async fn add(&self, record: Record) -> StorageResult<usize> {
        self.backend.add(record).await
    }

    /// Updates the record matching the input's key-field value, or appends it (upsert).
    pub async fn update(&self, record: Record) -> StorageResult<()> {
        self.backend.update(record).await
    }

    /// Finds the first record whose key-field value equals `key`.
    pub async fn find(&self, key: impl Into<Bson> + Send) -> StorageResult<Option<Record>> {
        self.backend.find(&key.into()).await
    }

    /// Returns every record in the store, in insertion order.
    pub async fn find_all(&self) -> StorageResult<Vec<Record>> {
        self.backend.find_all().await
    }

    /// Removes the first record whose key-field value equals `key`.
    pub async fn remove(&self, key: impl Into<Bson> + Send) -> StorageResult<Option<Record>> {
        self.backend.remove(&key.into()).await
    }
}

/// Conversion trait for converting a record store to a dynamic reference.
///
/// This trait allows converting any store type to a [`DynRecordStoreRef`] for runtime polymorphism.
pub trait AsDynRecordStore {
    /// Converts this store to a dynamic reference.
    fn as_dyn<'a>(&'a self) -> DynRecordStoreRef<'a>;
}

/// Conversion trait for converting a record store into a dynamic owned store.
///
/// This trait allows converting any store type to a [`DynRecordStore`] for runtime polymorphism.
pub trait IntoDynRecordStore {
    /// Converts this store into a dynamic owned store.
    fn into_dyn(self) -> DynRecordStore;
}

impl<B: RecordBackend + 'static> AsDynRecordStore for RecordStore<B> {
    fn as_dyn<'a>(&'a self) -> DynRecordStoreRef<'a> {
        DynRecordStoreRef::new(&self.backend)
    }
}

impl<B: RecordBackend + 'static> AsDynRecordStore for &'_ RecordStore<B> {
    fn as_dyn<'a>(&'a self) -> DynRecordStoreRef<'a> {
        DynRecordStoreRef::new(&self.backend)
    }
}

impl AsDynRecordStore for DynRecordStore {
    fn as_dyn<'a>(&'a self) -> DynRecordStoreRef<'a> {
        DynRecordStoreRef::new(&*self.backend)
    }
}

impl<'a> AsDynRecordStore for DynRecordStoreRef<'a> {
    fn as_dyn<'b>(&'b self) -> DynRecordStoreRef<'b> {
        DynRecordStoreRef::new(self.backend)
    }
}

impl<B: RecordBackend + 'static> IntoDynRecordStore for RecordStore<B> {
    fn into_dyn(self) -> DynRecordStore {
        DynRecordStore::new(Box::new(self.backend))
    }
}

impl IntoDynRecordStore for DynRecordStore {
    fn into_dyn(self) -> DynRecordStore {
        self
    }
}

pub trait AsStaticRecordStore {
    fn as_static<'a, B>(&'a self) -> Option<RecordStore<&'a B>>
    where
        B: RecordBackend + 'static;
}

pub trait IntoStaticRecordStore {
    fn into_static<B>(self) -> Option<RecordStore<B>>
    where
        B: RecordBackend + 'static;
}

impl AsStaticRecordStore for DynRecordStore {
    fn as_static<'a, B>(&'a self) -> Option<RecordStore<&'a B>>
    where
        B: RecordBackend + 'static,
    {
        self.backend
            .as_any()
            .downcast_ref::<B>()
            .map(|b| RecordStore::new(b))
    }
}

impl<'a> AsStaticRecordStore for DynRecordStoreRef<'a> {
    fn as_static<'b, B>(&'b self) -> Option<RecordStore<&'b B>>
    where
        B: RecordBackend + 'static,
    {
        self.backend
            .as_any()
            .downcast_ref::<B>()
            .map(|b| RecordStore::new(b))
    }
}

impl IntoStaticRecordStore for DynRecordStore {
    fn into_static<B>(self) -> Option<RecordStore<B>>
    where
        B: RecordBackend + 'static,
    {
        self.backend
            .into_any()
            .downcast::<B>()
            .ok()
            .map(|b| RecordStore::new(*b))
    }
}
