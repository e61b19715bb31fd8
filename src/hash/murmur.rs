// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

const M: u64 = 0xc6a4_a793_5bd1_e995;
const R: u32 = 47;
const SEED: u64 = 0x41C6_4E6D;

/// Computes a 64-bit `MurmurHash64A` hash with a fixed seed.
///
/// The input is consumed in 8-byte little-endian words; 1 to 7 trailing
/// bytes are folded into the accumulator with shifted XORs. Never reads past
/// the end of the slice.
#[must_use]
pub fn mmh64(bytes: &[u8]) -> u64 {
    let mut h = SEED ^ (bytes.len() as u64).wrapping_mul(M);

    let mut words = bytes.chunks_exact(8);

    for word in &mut words {
        let mut k = u64::from_le_bytes(word.try_into().expect("word should be 8 bytes"));

        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);

        h ^= k;
        h = h.wrapping_mul(M);
    }

    let tail = words.remainder();

    if !tail.is_empty() {
        for (i, &byte) in tail.iter().enumerate() {
            h ^= u64::from(byte) << (8 * i);
        }
        h = h.wrapping_mul(M);
    }

    h ^= h >> R;
    h = h.wrapping_mul(M);
    h ^= h >> R;

    h
}
