//! Main recstore crate providing a unified interface for model-driven record storage.
//!
//! This crate is the primary entry point for users of the recstore framework.
//! It re-exports the core types and functionality from the sub-crates and provides
//! convenient access to the bundled storage backend.
//!
//! # Features
//!
//! - **Opaque records** - Records are ordered field-to-value mappings; no schema is
//!   enforced by the storage layer
//! - **Model-driven keys** - The application's model layer names the key field; the
//!   store only ever compares against it
//! - **Pluggable backends** - The [`backend::RecordBackend`] trait abstracts over
//!   in-memory and out-of-process storage, with static or dynamic dispatch
//! - **Copy isolation** - Records returned by a store are shallow copies; callers can
//!   never mutate internal state through them
//!
//! # Quick Start
//!
//! ```ignore
//! use recstore::{prelude::*, memory::MemoryStore};
//! use bson::doc;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Describe the entity and its key field
//!     let model = ModelDescriptor::new("User").with_key("email");
//!
//!     // Create a store over the in-memory backend
//!     let store = RecordStore::new(MemoryStore::new(&model));
//!
//!     // Add a record; the result is the new total record count
//!     let count = store
//!         .add(doc! { "email": "alice@example.com", "firstName": "Alice" }.into())
//!         .await
//!         .unwrap();
//!     assert_eq!(count, 1);
//!
//!     // Look the record up by its key value
//!     let alice = store.find("alice@example.com").await.unwrap();
//!     println!("Found: {:?}", alice);
//!
//!     // Remove it; the removed record itself is returned
//!     let removed = store.remove("alice@example.com").await.unwrap();
//!     assert!(removed.is_some());
//!
//!     // Shutdown the store
//!     store.shutdown().await.unwrap();
//! }
//! ```
//!
//! # Dynamic Dispatch
//!
//! The `recstore` crate also supports dynamic dispatch for scenarios where backend types
//! are not known at compile time. You can convert a typed `RecordStore` into a
//! dynamically dispatched store using the `into_dyn` method. This allows for runtime
//! selection of backends without static type information.
//!
//! ```ignore
//! use recstore::{prelude::*, memory::MemoryStore};
//! use bson::doc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let model = ModelDescriptor::new("User").with_key("email");
//!     let store = RecordStore::new(MemoryStore::new(&model));
//!
//!     // Convert to a dynamically dispatched store
//!     let dyn_store = store.into_dyn();
//!
//!     dyn_store
//!         .add(doc! { "email": "bob@example.com" }.into())
//!         .await
//!         .unwrap();
//!
//!     // Recover the concrete backend when needed
//!     let static_store = dyn_store.as_static::<MemoryStore>().unwrap();
//!     assert_eq!(static_store.find_all().await.unwrap().len(), 1);
//! }
//! ```
//!
//! # Backends
//!
//! - [`memory`] - Fast in-memory storage for development and testing

pub mod prelude;

pub use recstore_core::{backend, error, model, record, store};

// Re-export BSON types for convenience
pub use bson;

/// In-memory storage backend implementations.
pub mod memory {
    pub use recstore_memory::{MemoryStore, MemoryStoreBuilder};
}
