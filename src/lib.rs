// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! Deterministic 64-bit hashing functions, a tiny move-to-front cache and a
//! double-hashing hash table.
//!
//! ##### About
//!
//! This crate provides three small, single-threaded building blocks:
//!
//! - [`hash`]: four stateless hashing functions (`fnv64`, `mmh64`, `xxh64`,
//!   `crc64`) mapping a byte slice to a `u64`
//! - [`Cache`]: a fixed-capacity associative cache that promotes entries to
//!   the front on every hit, targeting small, hot working sets where a linear
//!   scan beats hashing overhead
//! - [`Table`]: an open-addressing hash table that resolves collisions with
//!   double hashing over twin-prime-sized storage, so every probe sequence is
//!   a full permutation of the slot indices
//!
//! None of the structures use interior locking or atomics; exactly one
//! logical owner mutates them at a time (which the `&mut self` receivers
//! enforce). Values are owned by the structures and handed back to the caller
//! on eviction or removal.
//!
//! ```
//! use hash_cache::{Cache, Table};
//!
//! let mut cache = Cache::new(3)?;
//! cache.insert("alpha");
//! cache.insert("beta");
//! assert_eq!(cache.get(&"alpha"), Some(&"alpha"));
//!
//! let mut table = Table::with_capacity(16)?;
//! table.insert("alpha")?;
//! assert!(table.search(b"alpha").is_some());
//! assert!(table.search(b"gamma").is_none());
//! #
//! # Ok::<(), hash_cache::Error>(())
//! ```

#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod cache;
mod error;
pub mod hash;
mod policy;
mod table;

pub use cache::Cache;
pub use error::{Error, Result};
pub use policy::{Bytes, CachePolicy, Identity, TablePolicy};
pub use table::Table;
