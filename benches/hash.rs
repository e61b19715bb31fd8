use criterion::{criterion_group, criterion_main, Criterion};
use hash_cache::hash::{crc64, fnv64, mmh64, xxh64};

fn hash_throughput(c: &mut Criterion) {
    for size in [8, 64, 1_024, 65_536] {
        let buf = (0..size).map(|n| (n * 31 + 7) as u8).collect::<Vec<_>>();

        c.bench_function(&format!("fnv64 ({size} B)"), |b| {
            b.iter(|| fnv64(&buf));
        });

        c.bench_function(&format!("mmh64 ({size} B)"), |b| {
            b.iter(|| mmh64(&buf));
        });

        c.bench_function(&format!("xxh64 ({size} B)"), |b| {
            b.iter(|| xxh64(&buf));
        });

        c.bench_function(&format!("crc64 ({size} B)"), |b| {
            b.iter(|| crc64(&buf));
        });
    }
}

fn hash_short_keys(c: &mut Criterion) {
    let keys = (0..1_000)
        .map(|_| nanoid::nanoid!())
        .collect::<Vec<_>>();

    let mut cursor = 0;

    c.bench_function("xxh64 short key", |b| {
        b.iter(|| {
            cursor = (cursor + 1) % keys.len();
            xxh64(keys[cursor].as_bytes())
        });
    });
}

criterion_group!(benches, hash_throughput, hash_short_keys);
criterion_main!(benches);
