//! Storage backend abstraction for the record store.
//!
//! This module defines the core traits that abstract over different storage implementations,
//! allowing the record store to work with various backends (in-memory, persistent, remote, etc.).
//!
//! # Overview
//!
//! The [`RecordBackend`] trait provides a unified async interface for all storage operations:
//! bulk loading, appending, key-based update/find/remove, and full listing. Implementations
//! are required to be thread-safe (`Send + Sync`) and support concurrent access.
//!
//! # Traits
//!
//! - [`RecordBackend`]: The core trait for storage backends
//! - [`DynRecordBackend`]: A trait for dynamic dispatch over backend implementations
//! - [`RecordBackendBuilder`]: Factory trait for creating backend instances
//!
//! # Examples
//!
//! ```ignore
//! use recstore::backend::RecordBackend;
//! use recstore::record::Record;
//! use bson::doc;
//!
//! // Use a concrete backend implementation
//! let backend = MyBackendImpl::new();
//!
//! // Append a record
//! let record = Record::from(doc! { "email": "alice@example.com" });
//! let count = backend.add(record).await?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use async_trait::async_trait;
use bson::Bson;
use std::{any::Any, fmt::Debug};

use crate::{error::StorageResult, record::Record};

/// Abstract interface for record storage backends.
///
/// Implementers of this trait provide concrete storage strategies for a single
/// entity type's records, from the in-memory store in `recstore-memory` to
/// out-of-process services. The async signatures exist for interchangeability
/// with such remote backends; an implementation must make each result
/// available only after its mutation has fully completed.
///
/// # Thread Safety
///
/// All implementations must be thread-safe and support concurrent access from multiple
/// async tasks. Each operation must be atomic with respect to the record sequence:
/// either confine the backend to a single task or guard the sequence with one lock
/// held for the duration of the operation.
///
/// # Copy Discipline
///
/// Backends never hand out references into their internal state. Records returned
/// by `find` and `find_all` are shallow copies; only `remove` returns the stored
/// record itself, which at that point is no longer owned by the backend.
///
/// # Error Handling
///
/// Operations return [`StorageResult<T>`](crate::error::StorageResult). A missing
/// record is never an error: `find` and `remove` report it as `Ok(None)`.
#[async_trait]
pub trait RecordBackend: Send + Sync + Debug {
    /// Bulk-loads records into the store.
    ///
    /// Appends a shallow copy of each input record, in order, to the end of the
    /// stored sequence. No validation and no key check is performed.
    ///
    /// # Arguments
    ///
    /// * `records` - The records to load (any length, including empty)
    ///
    /// # Returns
    ///
    /// Always returns `Ok(())` for in-memory backends; remote backends may fail
    /// with a [`StorageError`](crate::error::StorageError).
    async fn load(&self, records: Vec<Record>) -> StorageResult<()>;

    /// Appends a single record to the store.
    ///
    /// No key-uniqueness check is performed: adding a record whose key collides
    /// with an existing one produces a duplicate, and key-based operations will
    /// only ever touch the first match in insertion order.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to append
    ///
    /// # Returns
    ///
    /// The new total record count after insertion. This is a running count, not
    /// a unique identifier.
    async fn add(&self, record: Record) -> StorageResult<usize>;

    /// Updates the record matching the input's key-field value, or appends it (upsert).
    ///
    /// Scans from the front of the sequence; the first record whose key-field value
    /// equals the input's is replaced in place, preserving its position. If no
    /// record matches, a copy of the input is appended to the end.
    ///
    /// # Arguments
    ///
    /// * `record` - The record carrying the key-field value to match on
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoKeyConfigured`](crate::error::StorageError::NoKeyConfigured)
    /// if the backend's model declares no key field. Nothing is mutated in that case.
    async fn update(&self, record: Record) -> StorageResult<()>;

    /// Finds the first record whose key-field value equals `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The key value to look up
    ///
    /// # Returns
    ///
    /// A shallow copy of the first match in insertion order, or `None` if no
    /// record matches. Not-found is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoKeyConfigured`](crate::error::StorageError::NoKeyConfigured)
    /// if the backend's model declares no key field.
    async fn find(&self, key: &Bson) -> StorageResult<Option<Record>>;

    /// Returns every record in the store, in insertion order.
    ///
    /// # Returns
    ///
    /// A new vector containing a shallow copy of every record. Mutating the
    /// result or its elements never affects the store.
    async fn find_all(&self) -> StorageResult<Vec<Record>>;

    /// Removes the first record whose key-field value equals `key`.
    ///
    /// The relative order of the remaining records is preserved.
    ///
    /// # Arguments
    ///
    /// * `key` - The key value to look up
    ///
    /// # Returns
    ///
    /// The removed record itself (not a copy; the store no longer owns it), or
    /// `None` if no record matched, in which case nothing was mutated.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoKeyConfigured`](crate::error::StorageError::NoKeyConfigured)
    /// if the backend's model declares no key field.
    async fn remove(&self, key: &Bson) -> StorageResult<Option<Record>>;

    /// Cleanly shuts down the backend, releasing all resources.
    ///
    /// The default implementation is a no-op, but backends with persistent storage or
    /// external connections should override this.
    async fn shutdown(self) -> StorageResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

#[async_trait]
impl<B> RecordBackend for &B
where
    B: RecordBackend,
{
    async fn load(&self, records: Vec<Record>) -> StorageResult<()> {
        (*self).load(records).await
    }

    async fn add(&self, record: Record) -> StorageResult<usize> {
        (*self).add(record).await
    }

    async fn update(&self, record: Record) -> StorageResult<()> {
        (*self).update(record).await
    }

    async fn find(&self, key: &Bson) -> StorageResult<Option<Record>> {
        (*self).find(key).await
    }

    async fn find_all(&self) -> StorageResult<Vec<Record>> {
        (*self).find_all().await
    }

    async fn remove(&self, key: &Bson) -> StorageResult<Option<Record>> {
        (*self).remove(key).await
    }
}

#[async_trait]
impl<B> RecordBackend for &mut B
where
    B: RecordBackend,
{
    async fn load(&self, records: Vec<Record>) -> StorageResult<()> {
        (**self).load(records).await
    }

    async fn add(&self, record: Record) -> StorageResult<usize> {
        (**self).add(record).await
    }

    async fn update(&self, record: Record) -> StorageResult<()> {
        (**self).update(record).await
    }

    async fn find(&self, key: &Bson) -> StorageResult<Option<Record>> {
        (**self).find(key).await
    }

    async fn find_all(&self) -> StorageResult<Vec<Record>> {
        (**self).find_all().await
    }

    async fn remove(&self, key: &Bson) -> StorageResult<Option<Record>> {
        (**self).remove(key).await
    }
}

/// Object-safe companion to [`RecordBackend`] for dynamic dispatch.
///
/// Automatically implemented for every `RecordBackend + 'static`. The `Any`
/// accessors allow recovering the concrete backend type from a trait object.
#[async_trait]
pub trait DynRecordBackend: Send + Sync + Debug {
    async fn load(&self, records: Vec<Record>) -> StorageResult<()>;
    async fn add(&self, record: Record) -> StorageResult<usize>;
    async fn update(&self, record: Record) -> StorageResult<()>;
    async fn find(&self, key: &Bson) -> StorageResult<Option<Record>>;
    async fn find_all(&self) -> StorageResult<Vec<Record>>;
    async fn remove(&self, key: &Bson) -> StorageResult<Option<Record>>;
    async fn shutdown_boxed(self: Box<Self>) -> StorageResult<()>;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

#[async_trait]
impl<B: RecordBackend + Send + Sync + 'static> DynRecordBackend for B {
    async fn load(&self, records: Vec<Record>) -> StorageResult<()> {
        RecordBackend::load(self, records).await
    }

    async fn add(&self, record: Record) -> StorageResult<usize> {
        RecordBackend::add(self, record).await
    }

    async fn update(&self, record: Record) -> StorageResult<()> {
        RecordBackend::update(self, record).await
    }

    async fn find(&self, key: &Bson) -> StorageResult<Option<Record>> {
        RecordBackend::find(self, key).await
    }

    async fn find_all(&self) -> StorageResult<Vec<Record>> {
        RecordBackend::find_all(self).await
    }

    async fn remove(&self, key: &Bson) -> StorageResult<Option<Record>> {
        RecordBackend::remove(self, key).await
    }

    async fn shutdown_boxed(self: Box<Self>) -> StorageResult<()> {
        RecordBackend::shutdown(*self).await
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Factory trait for constructing backend instances.
#[async_trait]
pub trait RecordBackendBuilder {
    type Backend: RecordBackend;

    async fn build(self) -> StorageResult<Self::Backend>;
}
