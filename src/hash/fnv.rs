// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const PRIME: u64 = 0x0100_0000_01b3;

/// Computes a 64-bit FNV-1a hash.
///
/// Avalanche behavior is weak for short or structured inputs, which is fine
/// for cache keys, but do not use this for adversarial inputs.
#[must_use]
pub fn fnv64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(OFFSET_BASIS, |h, &byte| {
        (h ^ u64::from(byte)).wrapping_mul(PRIME)
    })
}
