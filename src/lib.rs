//! Convenience wrapper around the fjall embedded key-value store
//!
//! This crate provides a small [`Store`] facade over a fjall keyspace:
//! - String and byte get/set with an explicit not-found error
//! - Hashed-key presence tracking (touch/exists) for deduplication-style
//!   workloads that never need the original value back
//! - Lifecycle management, including ephemeral stores backed by a
//!   temporary directory that is removed on close
//!
//! Durability, indexing, compaction, and crash recovery all belong to
//! fjall; this crate adds no storage logic of its own.

pub mod config;
pub mod error;
pub mod hash;
pub mod store;

mod engine;

// Re-export main types
pub use config::{Layout, StoreConfig};
pub use error::{Error, Result};
pub use store::Store;
