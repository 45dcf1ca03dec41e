//! Key-value storage port for TurboCommerce.
//!
//! The storefront persists a small amount of client state (the cart) in a
//! string key/value store. This crate defines that store as a trait so the
//! state engine never touches ambient I/O directly, plus two backends and a
//! typed JSON wrapper.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use turbo_cache::{Cache, MemoryStorage};
//!
//! let cache = Cache::new(Arc::new(MemoryStorage::new()));
//! cache.set("cart", &vec![1, 2, 3]).unwrap();
//! let cart: Option<Vec<u32>> = cache.get("cart").unwrap();
//! assert_eq!(cart, Some(vec![1, 2, 3]));
//! ```

mod error;
mod kv;
mod storage;

pub use error::CacheError;
pub use kv::Cache;
pub use storage::{FileStorage, MemoryStorage, StoragePort};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStorage, MemoryStorage, StoragePort};
}
