// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use std::collections::TryReserveError;

/// Represents errors that can occur in the cache and table structures
///
/// A key that is simply not present is a *miss*, reported as `None` by the
/// lookup operations, never as an error.
#[derive(Debug)]
pub enum Error {
    /// A zero capacity or size hint was passed to a constructor
    InvalidSize(usize),

    /// Probing visited every slot without finding a free one, and the table
    /// could not grow any further
    TableFull,

    /// Reserving backing storage failed
    Alloc(TryReserveError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HashCacheError: {self:?}")
    }
}

impl std::error::Error for Error {}

impl From<TryReserveError> for Error {
    fn from(value: TryReserveError) -> Self {
        Self::Alloc(value)
    }
}

/// Crate result
pub type Result<T> = std::result::Result<T, Error>;
