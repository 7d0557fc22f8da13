//! A record storage abstraction layer that provides a unified interface for model-driven stores.
//!
//! This crate is the core of the recstore project and provides:
//!
//! - **Record type** ([`record`]) - The ordered field-to-value mapping stored by every backend
//! - **Model seam** ([`model`]) - The narrow interface to the application's model layer
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing different storage backends
//! - **Record store** ([`store`]) - Main interface for working with a backend, statically or dynamically
//! - **Error handling** ([`error`]) - Error types and result types
//!
//! # Example
//!
//! ```ignore
//! use recstore::{model::ModelDescriptor, store::RecordStore};
//! use bson::doc;
//!
//! let model = ModelDescriptor::new("User").with_key("email");
//! let store = RecordStore::new(backend_for(&model));
//!
//! store
//!     .add(doc! { "email": "alice@example.com", "firstName": "Alice" }.into())
//!     .await?;
//!
//! let alice = store.find("alice@example.com").await?;
//! ```

#[allow(unused_extern_crates)]
extern crate self as recstore_core;

pub mod backend;
pub mod error;
pub mod model;
pub mod record;
pub mod store;
