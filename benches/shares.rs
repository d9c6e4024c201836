// SPDX-License-Identifier: CC0-1.0

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use secret_shares::{SeededRng, combine, split_with_rng};

fn bench_split(c: &mut Criterion) {
    let secret = vec![0x42u8; 1024];
    let mut group = c.benchmark_group("split");
    group.throughput(Throughput::Bytes(secret.len() as u64));

    for (n, t) in [(3, 2), (10, 5), (255, 128)] {
        let mut rng = SeededRng::seed_from_u64(0);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{t}-of-{n}")),
            &(n, t),
            |b, &(n, t)| b.iter(|| split_with_rng(black_box(&secret), n, t, &mut rng).unwrap()),
        );
    }

    group.finish();
}

fn bench_combine(c: &mut Criterion) {
    let secret = vec![0x42u8; 1024];
    let mut group = c.benchmark_group("combine");
    group.throughput(Throughput::Bytes(secret.len() as u64));

    for (n, t) in [(3, 2), (10, 5), (255, 128)] {
        let mut rng = SeededRng::seed_from_u64(0);
        let mut shares = split_with_rng(&secret, n, t, &mut rng).unwrap();
        shares.truncate(t);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{t}-of-{n}")),
            &shares,
            |b, shares| b.iter(|| combine(black_box(shares.as_slice())).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_split, bench_combine);
criterion_main!(benches);
