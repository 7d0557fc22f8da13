//! In-memory record storage backend for recstore.
//!
//! This crate provides a thread-safe, in-memory implementation of the `RecordBackend` trait.
//! It uses async-aware read-write locks for concurrent access and is ideal for development,
//! testing, and small-scale deployments. Nothing is persisted: all records are lost when the
//! last clone of a store is dropped.
//!
//! # Features
//!
//! - **Thread-safe access** - Concurrent reads and writes using async-aware RwLock
//! - **Insertion-ordered storage** - Records keep their load/add order; key lookups are
//!   first-match linear scans
//! - **Copy isolation** - Returned records are shallow copies, never references into the store
//! - **Optional key support** - Key-based operations are enabled by the model's key descriptor
//!
//! # Quick Start
//!
//! ```ignore
//! use recstore::{model::ModelDescriptor, store::RecordStore, memory::MemoryStore};
//! use bson::doc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = ModelDescriptor::new("User").with_key("email");
//!     let store = RecordStore::new(MemoryStore::new(&model));
//!
//!     store
//!         .add(doc! { "email": "alice@example.com", "firstName": "Alice" }.into())
//!         .await?;
//!
//!     let alice = store.find("alice@example.com").await?;
//!     assert!(alice.is_some());
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as recstore_memory;

pub mod store;

pub use store::{MemoryStore, MemoryStoreBuilder};
