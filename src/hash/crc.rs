// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use std::sync::OnceLock;

/// ECMA polynomial, bit-reversed
const POLYNOMIAL: u64 = 0xC96C_5795_D787_0F42;

static TABLE: OnceLock<[u64; 256]> = OnceLock::new();

#[allow(clippy::cast_possible_truncation)]
fn table() -> &'static [u64; 256] {
    TABLE.get_or_init(|| {
        let mut table = [0; 256];

        for (byte, entry) in table.iter_mut().enumerate() {
            let mut crc = byte as u64;

            for _ in 0..8 {
                crc = if crc & 1 == 1 {
                    (crc >> 1) ^ POLYNOMIAL
                } else {
                    crc >> 1
                };
            }

            *entry = crc;
        }

        table
    })
}

/// Computes a 64-bit CRC (`CRC-64/XZ`: reflected ECMA polynomial, initial
/// value all-ones, final value complemented).
///
/// The 256-entry lookup table is built once on first use and never mutated
/// afterwards.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn crc64(bytes: &[u8]) -> u64 {
    let table = table();

    let mut crc = u64::MAX;

    for &byte in bytes {
        let idx = usize::from((crc as u8) ^ byte);
        crc = table.get(idx).expect("table should have 256 entries") ^ (crc >> 8);
    }

    crc ^ u64::MAX
}
