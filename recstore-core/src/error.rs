//! Error types and result types for record store operations.
//!
//! This module provides error handling for all record store operations.
//! Use [`StorageResult<T>`] as the return type for fallible operations.

use bson::error::Error as BsonError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a record store.
///
/// This enum covers the key-configuration contract, serialization errors in the
/// record conversion helpers, and backend-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A key-based operation (update/find/remove) was requested on a store whose
    /// model declares no key field. Not-found is never reported through this enum;
    /// a missing record is a successful `None` result.
    #[error("no key configured for model")]
    NoKeyConfigured,
    /// Serialization/deserialization error when converting records between formats (BSON, JSON).
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// An error occurred in the underlying storage backend.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for record store operations.
///
/// This type alias is used throughout the crate to indicate operations that may fail
/// with a [`StorageError`].
pub type StorageResult<T> = Result<T, StorageError>;

impl From<BsonError> for StorageError {
    fn from(err: BsonError) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

impl From<SerdeJsonError> for StorageError {
    fn from(err: SerdeJsonError) -> Self {
        StorageError::Serialization(err.to_string())
    }
}
