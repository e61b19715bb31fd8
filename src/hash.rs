// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! Deterministic 64-bit hashing functions.
//!
//! All four functions are pure and reentrant: the same byte slice always
//! produces the same hash, across calls and across process runs. There is no
//! hidden state apart from `crc64`'s lookup table, which is computed exactly
//! once on first use and immutable afterwards.
//!
//! Zero is an ordinary hash value; callers must not use it to signal
//! anything.

mod crc;
mod fnv;
mod murmur;
mod xxhash;

pub use crc::crc64;
pub use fnv::fnv64;
pub use murmur::mmh64;
pub use xxhash::xxh64;
