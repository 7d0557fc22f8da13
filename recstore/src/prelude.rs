//! Convenient re-exports of commonly used types from recstore.
//!
//! Import this prelude module to quickly access the most frequently used types
//! and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use recstore::prelude::*;
//! ```
//!
//! This provides access to:
//! - The record type and model seam
//! - Store backends and builders
//! - Store interfaces and conversion traits
//! - Error types

pub use recstore_core::{
    backend::{DynRecordBackend, RecordBackend, RecordBackendBuilder},
    error::{StorageError, StorageResult},
    model::{KeyDescriptor, Model, ModelDescriptor},
    record::Record,
    store::{
        AsDynRecordStore, AsStaticRecordStore, DynRecordStore, DynRecordStoreRef,
        IntoDynRecordStore, IntoStaticRecordStore, RecordStore,
    },
};
