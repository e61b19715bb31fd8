// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

const PRIME_1: u64 = 0x9E37_79B1_85EB_CA87;
const PRIME_2: u64 = 0xC2B2_AE3D_27D4_EB4F;
const PRIME_3: u64 = 0x1656_67B1_9E37_79F9;
const PRIME_4: u64 = 0x85EB_CA77_C2B2_AE63;
const PRIME_5: u64 = 0x27D4_EB2F_1656_67C5;

const SEED: u64 = 0;

fn read_u64(bytes: &[u8]) -> u64 {
    u64::from_le_bytes(bytes.try_into().expect("should be 8 bytes"))
}

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(bytes.try_into().expect("should be 4 bytes"))
}

fn round(acc: u64, lane: u64) -> u64 {
    acc.wrapping_add(lane.wrapping_mul(PRIME_2))
        .rotate_left(31)
        .wrapping_mul(PRIME_1)
}

fn merge_round(h: u64, acc: u64) -> u64 {
    (h ^ round(0, acc)).wrapping_mul(PRIME_1).wrapping_add(PRIME_4)
}

fn avalanche(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(PRIME_2);
    h ^= h >> 29;
    h = h.wrapping_mul(PRIME_3);
    h ^= h >> 32;
    h
}

/// Computes a 64-bit `xxHash64` hash.
///
/// This is a bit-exact reproduction of the public xxHash64 algorithm (seed
/// zero), so hashes are compatible with every other conforming
/// implementation.
#[must_use]
pub fn xxh64(bytes: &[u8]) -> u64 {
    let mut rest = bytes;

    let mut h = if bytes.len() >= 32 {
        let mut v1 = SEED.wrapping_add(PRIME_1).wrapping_add(PRIME_2);
        let mut v2 = SEED.wrapping_add(PRIME_2);
        let mut v3 = SEED;
        let mut v4 = SEED.wrapping_sub(PRIME_1);

        let mut blocks = rest.chunks_exact(32);

        for block in &mut blocks {
            let (front, back) = block.split_at(16);
            let (lane1, lane2) = front.split_at(8);
            let (lane3, lane4) = back.split_at(8);

            v1 = round(v1, read_u64(lane1));
            v2 = round(v2, read_u64(lane2));
            v3 = round(v3, read_u64(lane3));
            v4 = round(v4, read_u64(lane4));
        }

        rest = blocks.remainder();

        let mut h = v1
            .rotate_left(1)
            .wrapping_add(v2.rotate_left(7))
            .wrapping_add(v3.rotate_left(12))
            .wrapping_add(v4.rotate_left(18));

        h = merge_round(h, v1);
        h = merge_round(h, v2);
        h = merge_round(h, v3);
        h = merge_round(h, v4);

        h
    } else {
        SEED.wrapping_add(PRIME_5)
    };

    h = h.wrapping_add(bytes.len() as u64);

    let mut words = rest.chunks_exact(8);

    for word in &mut words {
        h ^= round(0, read_u64(word));
        h = h.rotate_left(27).wrapping_mul(PRIME_1).wrapping_add(PRIME_4);
    }

    rest = words.remainder();

    // At most one 4-byte group can remain at this point
    let mut half_words = rest.chunks_exact(4);

    for half_word in &mut half_words {
        h ^= u64::from(read_u32(half_word)).wrapping_mul(PRIME_1);
        h = h.rotate_left(23).wrapping_mul(PRIME_2).wrapping_add(PRIME_3);
    }

    for &byte in half_words.remainder() {
        h ^= u64::from(byte).wrapping_mul(PRIME_5);
        h = h.rotate_left(11).wrapping_mul(PRIME_1);
    }

    avalanche(h)
}
