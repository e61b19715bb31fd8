// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let mut divisor = 3;

    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}

/// Finds the smallest `m >= lower` such that `m` and `m - 2` are both prime.
///
/// `m` is the upper member of a twin-prime pair, which makes it a valid
/// double-hashing table size: any step in `1..=m-2` is coprime to `m`.
pub fn next_twin_upper(lower: usize) -> Option<usize> {
    // (3, 5) is the first twin-prime pair
    let mut m = lower.max(5);

    loop {
        if is_prime(m) && is_prime(m - 2) {
            return Some(m);
        }
        m = m.checked_add(1)?;
    }
}
